use thiserror::Error;

/// Top-level error type for Termfolio.
///
/// Covers ambient failures only. An unrecognized command is never an error
/// here; it is a normal reply rendered with the `error` style.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TermfolioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for TermfolioError {
    fn from(err: toml::de::Error) -> Self {
        TermfolioError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for TermfolioError {
    fn from(err: toml::ser::Error) -> Self {
        TermfolioError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Termfolio operations.
pub type Result<T> = std::result::Result<T, TermfolioError>;
