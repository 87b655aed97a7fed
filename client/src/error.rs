//! Client-side fault type.
//!
//! The page does not recover from any of these: the operation that hit the
//! fault stops and the error is written to the browser console.

/// Failure reaching a browser facility the page depends on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("document has no body")]
    MissingBody,
    #[error("localStorage is unavailable")]
    StorageUnavailable,
    #[error("storage access failed: {0}")]
    Storage(String),
}
