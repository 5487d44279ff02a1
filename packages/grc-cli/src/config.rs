use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Definitions key used when neither the flag nor the environment names one.
pub const DEFAULT_DEFINITION_KEY: &str = "policies";

/// CLI defaults loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub definitions_path: Option<PathBuf>,
    pub definition_key: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self::from_vars(
            env::var("GRC_DEFINITIONS_PATH").ok(),
            env::var("GRC_DEFINITION_KEY").ok(),
        ))
    }

    fn from_vars(definitions_path: Option<String>, definition_key: Option<String>) -> Self {
        Self {
            definitions_path: definitions_path
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            definition_key: definition_key
                .filter(|key| !key.is_empty())
                .unwrap_or_else(|| DEFAULT_DEFINITION_KEY.to_string()),
        }
    }
}
