//! File metadata values for the source abstraction
//!
//! These are the minimal attributes the backup walker needs; real
//! filesystem adapters enrich them through [`ExtendedFileInfo`].

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Directory bit in [`FileInfo::mode`]
pub const MODE_DIR: u32 = libc::S_IFDIR as u32;

/// Minimal file metadata (name, size, mode, modification time)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Base name of the entry
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// Permission and type bits, POSIX layout
    pub mode: u32,
    /// Modification time
    pub mod_time: SystemTime,
}

impl FileInfo {
    /// Whether the mode carries the directory bit
    pub fn is_dir(&self) -> bool {
        self.mode & MODE_DIR != 0
    }
}

/// File metadata enriched with fields only real filesystems can fill
///
/// Virtual sources leave everything beyond the embedded [`FileInfo`]
/// at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedFileInfo {
    /// Basic metadata
    pub file_info: FileInfo,
    /// Device the entry lives on (0 for virtual sources)
    pub device_id: u64,
    /// Inode number (0 for virtual sources)
    pub inode: u64,
    /// Hard link count (0 for virtual sources)
    pub links: u64,
}

impl ExtendedFileInfo {
    /// Wrap basic metadata with no extended fields populated
    pub fn from_file_info(file_info: FileInfo) -> Self {
        ExtendedFileInfo {
            file_info,
            device_id: 0,
            inode: 0,
            links: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(mode: u32) -> FileInfo {
        FileInfo {
            name: "entry".to_string(),
            size: 42,
            mode,
            mod_time: SystemTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_is_dir_tracks_mode_bit() {
        assert!(info(MODE_DIR | 0o755).is_dir());
        assert!(!info(0o644).is_dir());
    }

    #[test]
    fn test_extended_stat_leaves_extras_zero() {
        let ext = ExtendedFileInfo::from_file_info(info(0o644));
        assert_eq!(ext.device_id, 0);
        assert_eq!(ext.inode, 0);
        assert_eq!(ext.links, 0);
        assert_eq!(ext.file_info.size, 42);
    }
}
