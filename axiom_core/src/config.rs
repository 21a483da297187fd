//! Model configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name reported in telemetry when none is configured.
pub const DEFAULT_MODEL_NAME: &str = "Axiom-Dynamic-Logic-Model-v2.1";

/// Knowledge base file used when none is configured.
pub const DEFAULT_KNOWLEDGE_BASE_PATH: &str = "data/knowledge_base.json";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Runtime settings for a model invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Name reported in telemetry.
    pub model_name: String,

    /// JSON file with citation records used for grounding.
    pub knowledge_base_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            knowledge_base_path: PathBuf::from(DEFAULT_KNOWLEDGE_BASE_PATH),
        }
    }
}

impl ModelConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml)?)
    }

    /// Read configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Override the knowledge base path.
    pub fn with_knowledge_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.knowledge_base_path = path.into();
        self
    }
}
