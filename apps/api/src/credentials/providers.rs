use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::CredentialProvider;

/// Hosted-secret store: a TOML file holding the key as a top-level string.
pub struct SecretsFileProvider {
    path: PathBuf,
    key: String,
}

impl SecretsFileProvider {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}

impl CredentialProvider for SecretsFileProvider {
    fn name(&self) -> &'static str {
        "secrets store"
    }

    fn try_resolve(&self) -> Option<String> {
        let raw = read_optional(&self.path)?;

        let table: toml::Table = match raw.parse() {
            Ok(t) => t,
            Err(e) => {
                warn!("Ignoring malformed secrets file {}: {e}", self.path.display());
                return None;
            }
        };

        match table.get(&self.key) {
            Some(toml::Value::String(s)) => Some(s.clone()),
            Some(_) => {
                warn!(
                    "Ignoring {} in {}: value is not a string",
                    self.key,
                    self.path.display()
                );
                None
            }
            None => None,
        }
    }
}

/// The process environment, which already includes anything `dotenvy` loaded at startup.
pub struct ProcessEnvProvider {
    key: String,
}

impl ProcessEnvProvider {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl CredentialProvider for ProcessEnvProvider {
    fn name(&self) -> &'static str {
        "environment"
    }

    fn try_resolve(&self) -> Option<String> {
        std::env::var(&self.key).ok()
    }
}

/// A local dotenv-style file, read without mutating the process environment.
pub struct EnvFileProvider {
    path: PathBuf,
    key: String,
}

impl EnvFileProvider {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }
}

impl CredentialProvider for EnvFileProvider {
    fn name(&self) -> &'static str {
        ".env file"
    }

    fn try_resolve(&self) -> Option<String> {
        let iter = match dotenvy::from_path_iter(&self.path) {
            Ok(iter) => iter,
            Err(e) if e.not_found() => {
                debug!("No env file at {}", self.path.display());
                return None;
            }
            Err(e) => {
                warn!("Ignoring unreadable env file {}: {e}", self.path.display());
                return None;
            }
        };

        // Later assignments override earlier ones, as when the file is loaded.
        let mut found = None;
        for item in iter {
            match item {
                Ok((k, v)) if k == self.key => found = Some(v),
                Ok(_) => {}
                Err(e) => {
                    warn!("Ignoring malformed env file {}: {e}", self.path.display());
                    return None;
                }
            }
        }
        found
    }
}

/// Reads a file, mapping "not found" to `None` quietly and other IO errors to `None` loudly.
fn read_optional(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(s) => Some(s),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No secrets file at {}", path.display());
            None
        }
        Err(e) => {
            warn!("Ignoring unreadable secrets file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_file_yields_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OTHER = \"x\"\nOPENAI_API_KEY = \"sk-abc\"\n").unwrap();

        let provider = SecretsFileProvider::new(&path, "OPENAI_API_KEY");
        assert_eq!(provider.try_resolve().as_deref(), Some("sk-abc"));
    }

    #[test]
    fn test_secrets_file_missing_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let provider = SecretsFileProvider::new(dir.path().join("nope.toml"), "OPENAI_API_KEY");
        assert!(provider.try_resolve().is_none());
    }

    #[test]
    fn test_secrets_file_malformed_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = \"unterminated\n").unwrap();

        let provider = SecretsFileProvider::new(&path, "OPENAI_API_KEY");
        assert!(provider.try_resolve().is_none());
    }

    #[test]
    fn test_secrets_file_non_string_value_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secrets.toml");
        std::fs::write(&path, "OPENAI_API_KEY = 42\n").unwrap();

        let provider = SecretsFileProvider::new(&path, "OPENAI_API_KEY");
        assert!(provider.try_resolve().is_none());
    }

    #[test]
    fn test_env_file_yields_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "# local dev\nPORT=9000\nOPENAI_API_KEY=sk-env\n").unwrap();

        let provider = EnvFileProvider::new(&path, "OPENAI_API_KEY");
        assert_eq!(provider.try_resolve().as_deref(), Some("sk-env"));
    }

    #[test]
    fn test_env_file_last_assignment_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "OPENAI_API_KEY=sk-old\nOPENAI_API_KEY=\"sk-new\"\n").unwrap();

        let provider = EnvFileProvider::new(&path, "OPENAI_API_KEY");
        assert_eq!(provider.try_resolve().as_deref(), Some("sk-new"));
    }

    #[test]
    fn test_env_file_without_key_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "PORT=9000\n").unwrap();

        let provider = EnvFileProvider::new(&path, "OPENAI_API_KEY");
        assert!(provider.try_resolve().is_none());
    }

    #[test]
    fn test_env_file_missing_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let provider = EnvFileProvider::new(dir.path().join(".env"), "OPENAI_API_KEY");
        assert!(provider.try_resolve().is_none());
    }

    #[test]
    fn test_process_env_provider() {
        std::env::set_var("PROMPT_ENHANCER_PROVIDER_TEST_KEY", "sk-proc");
        let provider = ProcessEnvProvider::new("PROMPT_ENHANCER_PROVIDER_TEST_KEY");
        assert_eq!(provider.try_resolve().as_deref(), Some("sk-proc"));

        let unset = ProcessEnvProvider::new("PROMPT_ENHANCER_PROVIDER_TEST_UNSET");
        assert!(unset.try_resolve().is_none());
    }
}
