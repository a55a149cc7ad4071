use crate::errors::ChainConstructionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Validation(String),

    #[error("Invalid local record {name}: {reason}")]
    InvalidRecord { name: String, reason: String },

    #[error(transparent)]
    Chain(#[from] ChainConstructionError),
}
