//! Error types for the terminal session.

use termfolio_core::error::TermfolioError;
use termfolio_core::types::Lifecycle;

/// Errors from misuse of the session contract.
///
/// Unrecognized input is not an error; it resolves to an error-category reply.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("terminal is not open (currently {0})")]
    NotOpen(Lifecycle),
    #[error("invalid lifecycle transition: {from} -> {to}")]
    InvalidTransition { from: Lifecycle, to: Lifecycle },
    #[error("input exceeds maximum length of {0} characters")]
    InputTooLong(usize),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<TermfolioError> for ChatError {
    fn from(err: TermfolioError) -> Self {
        ChatError::Config(err.to_string())
    }
}
