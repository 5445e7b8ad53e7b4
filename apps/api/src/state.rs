use std::sync::Arc;

use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `OpenAiClient`.
    pub llm: Arc<dyn CompletionProvider>,
    /// Key found by the credential chain at startup. `None` means the form asks for one.
    pub configured_api_key: Option<String>,
}

impl AppState {
    /// The configured key wins; otherwise the key typed into the form, if any.
    pub fn api_key_for(&self, submitted: Option<&str>) -> Option<String> {
        self.configured_api_key
            .clone()
            .or_else(|| submitted.map(str::trim).filter(|k| !k.is_empty()).map(str::to_owned))
    }
}
