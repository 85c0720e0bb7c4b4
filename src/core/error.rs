use thiserror::Error;

use crate::nuclear::GateDenial;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Nuclear strike not authorized: {0}")]
    NuclearNotAuthorized(GateDenial),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl EngineError {
    /// Caller-side defects: the engine refused to produce a result
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput(_) | EngineError::NuclearNotAuthorized(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
