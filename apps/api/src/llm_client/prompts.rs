// Shared prompt constants.
// Feature-specific prompts live alongside the feature (see enhancer/prompts.rs).

/// Generic assistant persona sent as the system message.
pub const ASSISTANT_SYSTEM: &str = "You are a helpful AI assistant.";
