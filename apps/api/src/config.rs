use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Every setting has a default; only a malformed PORT fails startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub openai_base_url: String,
    /// Hosted-secret store, a TOML file with a top-level `OPENAI_API_KEY`.
    pub secrets_path: PathBuf,
    pub env_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            openai_base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            secrets_path: PathBuf::from(env_or("SECRETS_PATH", ".streamlit/secrets.toml")),
            env_file: PathBuf::from(env_or("ENV_FILE", ".env")),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_or_falls_back_when_unset() {
        assert_eq!(
            env_or("PROMPT_ENHANCER_TEST_UNSET_VARIABLE", "fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_env_or_ignores_blank_values() {
        std::env::set_var("PROMPT_ENHANCER_TEST_BLANK_VARIABLE", "   ");
        assert_eq!(
            env_or("PROMPT_ENHANCER_TEST_BLANK_VARIABLE", "fallback"),
            "fallback"
        );
    }
}
