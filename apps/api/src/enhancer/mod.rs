//! Prompt Enhancement: composes the instruction prompt and makes one completion call.
//!
//! Flow: PromptRequest → composed_prompt → CompletionProvider::complete → trimmed text.
//!
//! Field validation belongs to the caller; `enhance` only refuses a blank key.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::llm_client::prompts::ASSISTANT_SYSTEM;
use crate::llm_client::{ChatMessage, CompletionProvider, LlmError};

pub mod handlers;
pub mod prompts;

use prompts::ENHANCE_INSTRUCTION;

/// Marker prefixed to every rendered failure.
pub const ERROR_PREFIX: &str = "Error: ";

/// The three user-supplied fields of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptRequest {
    pub role: String,
    pub context: String,
    pub task: String,
}

impl PromptRequest {
    pub fn new(
        role: impl Into<String>,
        context: impl Into<String>,
        task: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            context: context.into(),
            task: task.into(),
        }
    }

    /// Instruction, blank line, then the Role / Context / Task block, byte for byte.
    pub fn composed_prompt(&self) -> String {
        format!(
            "{ENHANCE_INSTRUCTION}\n\nRole: {}\nContext: {}\nTask: {}",
            self.role, self.context, self.task
        )
    }

    /// Names of the fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("role", &self.role),
            ("context", &self.context),
            ("task", &self.task),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// Enhances a prompt with a single completion call.
///
/// The credential is passed in explicitly. A blank key fails with
/// `LlmError::MissingApiKey` before the provider is touched.
pub async fn enhance(
    provider: &dyn CompletionProvider,
    api_key: &str,
    request: &PromptRequest,
) -> Result<String, LlmError> {
    if api_key.trim().is_empty() {
        return Err(LlmError::MissingApiKey);
    }

    let messages = [
        ChatMessage::system(ASSISTANT_SYSTEM),
        ChatMessage::user(request.composed_prompt()),
    ];

    match provider.complete(api_key, &messages).await {
        Ok(content) => {
            let enhanced = content.trim().to_string();
            info!("Prompt enhanced ({} chars)", enhanced.len());
            Ok(enhanced)
        }
        Err(e) => {
            warn!("Prompt enhancement failed: {e}");
            Err(e)
        }
    }
}

/// Text form of an enhancement outcome: the content, or `Error: {description}`.
pub fn render_outcome(outcome: &Result<String, LlmError>) -> String {
    match outcome {
        Ok(text) => text.clone(),
        Err(e) => format!("{ERROR_PREFIX}{e}"),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
