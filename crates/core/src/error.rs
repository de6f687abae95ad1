//! Error types for talking to the remote task store.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

use crate::model::TaskId;

/// Result type for store and synchronization operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by a [`crate::TaskStore`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The request never produced an HTTP response (network, CORS, timeout).
    #[error("transport failure: {reason}")]
    Transport { reason: String },

    /// The store answered with a status the operation does not accept.
    #[error("store answered with HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body could not be decoded.
    #[error("failed to decode store response: {reason}")]
    Decode { reason: String },

    /// The record resource holds no document.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// A resource URL could not be built from the configured base.
    #[error("invalid store url: {reason}")]
    InvalidUrl { reason: String },
}

impl StoreError {
    /// Create a transport error.
    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport {
            reason: reason.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// Create an invalid url error.
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

impl From<url::ParseError> for StoreError {
    fn from(err: url::ParseError) -> Self {
        Self::invalid_url(err.to_string())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {reason}")]
    FileReadFailed { path: String, reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    /// Create an invalid value error.
    pub fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
