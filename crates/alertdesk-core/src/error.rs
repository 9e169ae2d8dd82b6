//! Error types for alertdesk-core

use thiserror::Error;

pub use crate::api::ApiError;

/// Result type alias using alertdesk-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in alertdesk-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid or incomplete client configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Request to the project API failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
