//! Error types for the browser front-end
//!
//! Store failures come from `tracker_core`; the rest are browser APIs that
//! were unavailable or refused.

use thiserror::Error;
use tracker_core::StoreError;

/// Errors raised by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// The remote store rejected or failed a request.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No `window` object (not running in a browser).
    #[error("browser window is not available")]
    NoWindow,

    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Browser(String),
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
