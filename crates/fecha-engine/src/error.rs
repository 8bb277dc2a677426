//! Error types for fecha-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Empty date expression")]
    Empty,

    #[error("Unrecognized date expression: '{0}'")]
    Unrecognized(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;
