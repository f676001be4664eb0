//! Source filesystem abstraction
//!
//! The backup walker is written against the [`FileSystem`] trait so the
//! same traversal code can ingest a real directory tree, or a synthetic
//! one such as [`ReaderFs`] which exposes a byte stream as a single file.

mod info;
mod node;
pub mod path;
mod reader;

pub use info::{ExtendedFileInfo, FileInfo, MODE_DIR};
pub use node::{Node, NodeType};
pub use reader::{ReaderFs, SourceStream};

use crate::error::Result;

/// Open for reading only
pub const O_RDONLY: i32 = libc::O_RDONLY;
/// Do not follow symlinks on open
pub const O_NOFOLLOW: i32 = libc::O_NOFOLLOW;

/// An open file within a source filesystem
pub trait File: Send {
    /// Read into `buf`, returning the number of bytes read (0 at end of
    /// stream).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Release the handle and the resources behind it.
    fn close(&mut self) -> Result<()>;

    /// Metadata for this handle.
    fn stat(&self) -> Result<FileInfo>;

    /// Names of the directory's entries. `n <= 0` returns all names at
    /// once; `n > 0` requests a paged listing, which not every
    /// implementation supports.
    fn read_dir_names(&mut self, n: i32) -> Result<Vec<String>>;
}

/// Capability interface consumed by the generic backup walker
///
/// Paths are always slash-separated virtual paths. Implementations must
/// reject open flags outside {[`O_RDONLY`], [`O_NOFOLLOW`]}.
pub trait FileSystem: Send + Sync {
    /// Open the named file with the given flags.
    fn open_file(&self, path: &str, flags: i32) -> Result<Box<dyn File>>;

    /// Metadata for the named file, following symlinks.
    fn stat(&self, path: &str) -> Result<FileInfo>;

    /// Metadata for the named file without following symlinks.
    fn lstat(&self, path: &str) -> Result<FileInfo>;

    /// Device identifier backing the given metadata, where meaningful.
    fn device_id(&self, fi: &FileInfo) -> Result<u64>;

    /// Metadata enriched with fields only real filesystems can fill.
    fn extended_stat(&self, fi: &FileInfo) -> ExtendedFileInfo;

    /// Build the backup-engine node for an entry from its metadata.
    fn node_from_file_info(&self, path: &str, fi: &FileInfo) -> Result<Node>;

    /// Join path elements, cleaning the result.
    fn join(&self, elems: &[&str]) -> String;

    /// Separator for directory components.
    fn separator(&self) -> char;

    /// Whether the path is absolute.
    fn is_abs(&self, path: &str) -> bool;

    /// Absolute representation of `path`, cleaned.
    fn abs(&self, path: &str) -> Result<String>;

    /// Lexically cleaned form of `path`.
    fn clean(&self, path: &str) -> String;

    /// Last element of `path`.
    fn base(&self, path: &str) -> String;

    /// All but the last element of `path`.
    fn dir(&self, path: &str) -> String;

    /// Leading volume name; empty on POSIX-style sources.
    fn volume_name(&self, path: &str) -> String;
}
