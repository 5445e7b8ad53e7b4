//! Credential resolution: an ordered chain of providers, first hit wins.
//!
//! Absence is the normal fall-through signal. A source that exists but cannot
//! be read is logged and then treated exactly like an absent one.

use std::path::Path;

use tracing::{debug, info};

pub mod providers;

pub use providers::{EnvFileProvider, ProcessEnvProvider, SecretsFileProvider};

/// Name of the credential in every source.
pub const API_KEY_NAME: &str = "OPENAI_API_KEY";

/// A single source of the API credential.
pub trait CredentialProvider: Send + Sync {
    /// Short label used in logs. Never includes the credential itself.
    fn name(&self) -> &'static str;

    fn try_resolve(&self) -> Option<String>;
}

/// Ordered list of providers tried in sequence.
pub struct CredentialChain {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialChain {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Secrets store, then process environment, then the `.env` file.
    pub fn standard(secrets_path: &Path, env_file: &Path) -> Self {
        Self::standard_for(API_KEY_NAME, secrets_path, env_file)
    }

    fn standard_for(key: &str, secrets_path: &Path, env_file: &Path) -> Self {
        Self::new(vec![
            Box::new(SecretsFileProvider::new(secrets_path, key)),
            Box::new(ProcessEnvProvider::new(key)),
            Box::new(EnvFileProvider::new(env_file, key)),
        ])
    }

    pub fn resolve(&self) -> Option<String> {
        for provider in &self.providers {
            match provider.try_resolve().filter(|key| !key.trim().is_empty()) {
                Some(key) => {
                    info!("API key loaded from {}", provider.name());
                    return Some(key);
                }
                None => debug!("No API key from {}", provider.name()),
            }
        }
        info!("No configured API key; the form will ask for one");
        None
    }
}

/// Resolves the API key from the standard sources.
/// `None` means the caller must obtain the key interactively.
pub fn resolve_api_key(secrets_path: &Path, env_file: &Path) -> Option<String> {
    CredentialChain::standard(secrets_path, env_file).resolve()
}
