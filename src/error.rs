use thiserror::Error;

/// Custom error types for keyscout
#[derive(Debug, Error)]
pub enum KeyscoutError {
    #[error("Query is empty. Enter a keyword or phrase to research.")]
    EmptyQuery,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize results: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
