//! Remote storage backend configuration
//!
//! Network transport lives elsewhere; this module only prepares backend
//! configuration: connection-string parsing, credential resolution and
//! password redaction, plus the registry the program uses to enumerate
//! known backends.

mod registry;
pub mod rest;

pub use registry::{BackendDescriptor, OptionSpec, Registry};
pub use rest::RestConfig;
