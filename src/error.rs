//! Error types for snapvault

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All errors produced by the source and backend layers
#[derive(Debug, Error)]
pub enum Error {
    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Path does not exist in the source tree
    #[error("{path}: no such file or directory")]
    NotFound { path: String },

    /// Open flags outside the supported read-only set
    #[error("{path}: invalid combination of open flags {flags:#x}")]
    InvalidFlags { path: String, flags: i32 },

    /// The one-shot source stream was already handed out
    #[error("{path}: source stream already consumed")]
    AlreadyConsumed { path: String },

    /// End of stream reached without reading any data
    #[error("{path}: no data read")]
    EmptySource { path: String },

    /// Data operation attempted on a handle that only supports metadata
    #[error("{path}: operation not supported")]
    InvalidOperation { path: String },

    /// Feature intentionally unavailable in this layer
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),

    /// Malformed backend configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Endpoint URL failed to parse
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// True for the "never existed" condition, as opposed to
    /// "exists but was misused" ([`Error::AlreadyConsumed`] etc.).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
