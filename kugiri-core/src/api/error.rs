//! Error types for the API

use thiserror::Error;

/// Error type for API operations
///
/// Rule construction and matching are total and never fail; errors only
/// arise at the integration boundary (input acquisition and decoding).
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Infrastructure error (I/O, etc.)
    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, Error>;
