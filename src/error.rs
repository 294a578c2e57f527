//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExampleError {
    /// An argument's runtime type did not match the expected type.
    #[error("'{name}' should be of type '{expected}' instead of type '{got}'.")]
    TypeError {
        name: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExampleError>;
