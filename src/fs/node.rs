//! Backup-engine node representation
//!
//! A [`Node`] is what the archiver stores in tree blobs for each
//! directory entry. This layer only builds the basic shape; ownership
//! and extended attributes come from the filesystem adapter.

use crate::fs::info::FileInfo;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Node type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    /// Regular file
    File,
    /// Directory
    Dir,
}

/// Directory entry as recorded in a snapshot tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Base name of the entry
    pub name: String,
    /// Full path within the source
    pub path: String,
    /// Entry type
    pub kind: NodeType,
    /// Permission and type bits
    pub mode: u32,
    /// Modification time
    pub mtime: SystemTime,
    /// Change time
    pub ctime: SystemTime,
    /// Size in bytes (0 for directories)
    pub size: u64,
    /// Owning user ID
    pub uid: u32,
    /// Owning group ID
    pub gid: u32,
}

impl Node {
    /// Build the basic node from file metadata; ownership fields are
    /// left at zero for the adapter to fill.
    pub fn from_file_info(path: &str, fi: &FileInfo) -> Self {
        let kind = if fi.is_dir() {
            NodeType::Dir
        } else {
            NodeType::File
        };
        Node {
            name: fi.name.clone(),
            path: path.to_string(),
            kind,
            mode: fi.mode,
            mtime: fi.mod_time,
            ctime: fi.mod_time,
            size: if kind == NodeType::Dir { 0 } else { fi.size },
            uid: 0,
            gid: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::info::MODE_DIR;

    #[test]
    fn test_node_from_file_info() {
        let fi = FileInfo {
            name: "stdin".to_string(),
            size: 128,
            mode: 0o644,
            mod_time: SystemTime::UNIX_EPOCH,
        };
        let node = Node::from_file_info("/backup/stdin", &fi);
        assert_eq!(node.name, "stdin");
        assert_eq!(node.path, "/backup/stdin");
        assert_eq!(node.kind, NodeType::File);
        assert_eq!(node.size, 128);
        assert_eq!(node.ctime, node.mtime);
    }

    #[test]
    fn test_directory_node_has_zero_size() {
        let fi = FileInfo {
            name: "backup".to_string(),
            size: 4096,
            mode: MODE_DIR | 0o755,
            mod_time: SystemTime::UNIX_EPOCH,
        };
        let node = Node::from_file_info("/backup", &fi);
        assert_eq!(node.kind, NodeType::Dir);
        assert_eq!(node.size, 0);
    }

    #[test]
    fn test_node_serde_round_trip() {
        let fi = FileInfo {
            name: "stdin".to_string(),
            size: 7,
            mode: 0o600,
            mod_time: SystemTime::UNIX_EPOCH,
        };
        let node = Node::from_file_info("/stdin", &fi);
        let json = serde_json::to_string(&node).unwrap();
        let back: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
    }
}
