pub mod config;
pub mod error;
pub mod types;

pub use config::TermfolioConfig;
pub use error::{Result, TermfolioError};
pub use types::*;
