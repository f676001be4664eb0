//! snapvault - Encrypted, deduplicating backup tool
//!
//! This library currently covers the source and backend abstraction
//! layer: a virtual filesystem that feeds an arbitrary byte stream
//! (e.g. piped input) to the generic backup walker as a single file,
//! and the configuration and credential handling for the REST storage
//! backend.

pub mod backend;
pub mod error;
pub mod fs;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::backend::{Registry, RestConfig};
    pub use crate::error::{Error, Result};
    pub use crate::fs::{File, FileSystem, ReaderFs};
}
