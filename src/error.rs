//! Error types for the scan handler.
//!
//! Every failure on the request path collapses into one of these variants and
//! ultimately into a 500 response envelope; the handler itself never
//! propagates an error to the runtime.

/// Error type covering the scan and encode stages of a request.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The DynamoDB scan call failed.
    #[error("{0}")]
    Scan(String),

    /// An attribute value could not be represented as JSON.
    #[error("Unsupported attribute value: {0}")]
    UnsupportedAttribute(String),

    /// A number attribute could not be parsed as a decimal.
    #[error("Invalid number attribute: {0}")]
    InvalidNumber(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// Create a Scan error from any SDK error, keeping the service's own
    /// message when one is present.
    pub fn scan<E: std::error::Error>(err: E) -> Self {
        let mut msg = err.to_string();
        let mut source = err.source();
        while let Some(inner) = source {
            msg = format!("{}: {}", msg, inner);
            source = inner.source();
        }
        Self::Scan(msg)
    }
}

/// Result type alias using the handler Error type.
pub type Result<T> = std::result::Result<T, Error>;
