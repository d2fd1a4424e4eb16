use thiserror::Error;

/// Top-level error type for the Vitae workspace.
///
/// Startup failures (configuration file, profile document) and server
/// failures share this type so that the binary can propagate them with `?`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VitaeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile configuration error: {0}")]
    Profile(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for VitaeError {
    fn from(err: toml::de::Error) -> Self {
        VitaeError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for VitaeError {
    fn from(err: serde_json::Error) -> Self {
        VitaeError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Vitae operations.
pub type Result<T> = std::result::Result<T, VitaeError>;
