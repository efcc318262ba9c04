/// Error types for the catalog library
use thiserror::Error;

/// Failures of a filter request that never reach the display region.
///
/// Both variants are logged to the diagnostic channel and swallowed: the
/// book list keeps its prior content. A server-reported error (the `error`
/// field of a successful response) is not a `CatalogError`; it decodes to
/// [`crate::ResultSet::ServiceError`] and is rendered inline.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Response body was not a recognized /filter_books payload
    #[error("Failed to decode filter payload: {0}")]
    PayloadDecode(#[from] serde_json::Error),

    /// Network-level failure before a body could be read
    #[error("Transport failure: {0}")]
    Transport(String),
}

/// Type alias for Results using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;
