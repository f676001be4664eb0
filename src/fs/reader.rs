//! A filesystem exposing a single file backed by a byte stream
//!
//! [`ReaderFs`] presents a tiny synthetic tree: the root directory, the
//! ancestors of the logical path, and one real file whose contents come
//! from an externally supplied stream (typically standard input). The
//! file can be opened exactly once; every later attempt reports
//! [`Error::AlreadyConsumed`] so a consumed source is never mistaken
//! for a missing one.

use crate::error::{Error, Result};
use crate::fs::info::{ExtendedFileInfo, FileInfo, MODE_DIR};
use crate::fs::node::Node;
use crate::fs::path;
use crate::fs::{File, FileSystem, O_NOFOLLOW, O_RDONLY};
use parking_lot::Mutex;
use std::io::Read;
use std::time::SystemTime;
use tracing::debug;

/// Byte stream a [`ReaderFs`] can serve as its single file
///
/// `close` releases the underlying resource; the default is a no-op for
/// streams whose teardown happens on drop.
pub trait SourceStream: Read + Send {
    /// Release the underlying resource.
    fn close(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SourceStream for std::io::Stdin {}
impl SourceStream for std::io::Empty {}
impl<T: AsRef<[u8]> + Send> SourceStream for std::io::Cursor<T> {}

/// Filesystem with a single stream-backed file
pub struct ReaderFs {
    name: String,
    mode: u32,
    mod_time: SystemTime,
    size: u64,
    allow_empty_file: bool,
    // One-shot gate: the lock is held only while the stream is moved
    // out, never during reads. Exactly one open_file call gets Some.
    stream: Mutex<Option<Box<dyn SourceStream>>>,
}

impl ReaderFs {
    /// Create a source exposing `stream` as the file at `name`.
    ///
    /// `mode`, `mod_time` and `size` become the file's metadata. With
    /// `allow_empty_file` unset, reading the file to end-of-stream
    /// without any data fails instead of recording an empty file.
    pub fn new(
        name: impl Into<String>,
        stream: Box<dyn SourceStream>,
        mode: u32,
        mod_time: SystemTime,
        size: u64,
        allow_empty_file: bool,
    ) -> Self {
        ReaderFs {
            name: name.into(),
            mode,
            mod_time,
            size,
            allow_empty_file,
            stream: Mutex::new(Some(stream)),
        }
    }

    /// Logical path of the exposed file.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn file_info(&self) -> FileInfo {
        FileInfo {
            name: path::base(&self.name),
            size: self.size,
            mode: self.mode,
            mod_time: self.mod_time,
        }
    }

    fn dir_info(&self, name: &str) -> FileInfo {
        FileInfo {
            name: path::base(name),
            size: 0,
            mode: MODE_DIR | 0o755,
            mod_time: SystemTime::now(),
        }
    }
}

impl FileSystem for ReaderFs {
    fn open_file(&self, name: &str, flags: i32) -> Result<Box<dyn File>> {
        if flags & !(O_RDONLY | O_NOFOLLOW) != 0 {
            return Err(Error::InvalidFlags {
                path: name.to_string(),
                flags,
            });
        }

        if name == self.name {
            return match self.stream.lock().take() {
                Some(stream) => {
                    debug!("handing out source stream for {}", name);
                    Ok(Box::new(ReaderFile::new(
                        stream,
                        self.file_info(),
                        self.allow_empty_file,
                    )))
                }
                None => Err(Error::AlreadyConsumed {
                    path: name.to_string(),
                }),
            };
        }

        if name == "/" || name == "." {
            return Ok(Box::new(FakeDir::new(
                vec![self.file_info()],
                self.dir_info(name),
            )));
        }

        Err(Error::NotFound {
            path: name.to_string(),
        })
    }

    fn stat(&self, name: &str) -> Result<FileInfo> {
        self.lstat(name)
    }

    fn lstat(&self, name: &str) -> Result<FileInfo> {
        if name == self.name {
            return Ok(self.file_info());
        }
        if name == "/" || name == "." {
            return Ok(self.dir_info(name));
        }

        // Walk the ancestors of the logical path up to the root
        // sentinel; everything else does not exist.
        let mut dir = path::dir(&self.name);
        loop {
            if dir == "/" || dir == "." {
                break;
            }
            if name == dir {
                return Ok(self.dir_info(name));
            }
            dir = path::dir(&dir);
        }

        Err(Error::NotFound {
            path: name.to_string(),
        })
    }

    fn device_id(&self, _fi: &FileInfo) -> Result<u64> {
        Err(Error::NotImplemented(
            "device IDs are not supported by virtual sources",
        ))
    }

    fn extended_stat(&self, fi: &FileInfo) -> ExtendedFileInfo {
        ExtendedFileInfo::from_file_info(fi.clone())
    }

    fn node_from_file_info(&self, path: &str, fi: &FileInfo) -> Result<Node> {
        let mut node = Node::from_file_info(path, fi);

        // The virtual source has no real owner; attribute the entry to
        // the current process and mirror mtime into ctime.
        node.uid = unsafe { libc::getuid() };
        node.gid = unsafe { libc::getgid() };
        node.ctime = node.mtime;

        Ok(node)
    }

    fn join(&self, elems: &[&str]) -> String {
        path::join(elems)
    }

    fn separator(&self) -> char {
        path::SEPARATOR
    }

    fn is_abs(&self, _path: &str) -> bool {
        true
    }

    fn abs(&self, p: &str) -> Result<String> {
        Ok(path::clean(p))
    }

    fn clean(&self, p: &str) -> String {
        path::clean(p)
    }

    fn base(&self, p: &str) -> String {
        path::base(p)
    }

    fn dir(&self, p: &str) -> String {
        path::dir(p)
    }

    fn volume_name(&self, _path: &str) -> String {
        String::new()
    }
}

/// The one live handle for the stream-backed file
struct ReaderFile {
    stream: Box<dyn SourceStream>,
    info: FileInfo,
    allow_empty_file: bool,
    bytes_read: bool,
}

impl ReaderFile {
    fn new(stream: Box<dyn SourceStream>, info: FileInfo, allow_empty_file: bool) -> Self {
        ReaderFile {
            stream,
            info,
            allow_empty_file,
            bytes_read: false,
        }
    }
}

impl File for ReaderFile {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.stream.read(buf)?;
        if n > 0 {
            self.bytes_read = true;
        }

        // End of stream without a single byte usually means the
        // upstream producer failed; refuse to record an empty file
        // unless the caller opted in.
        if n == 0 && !buf.is_empty() && !self.bytes_read && !self.allow_empty_file {
            return Err(Error::EmptySource {
                path: self.info.name.clone(),
            });
        }

        Ok(n)
    }

    fn close(&mut self) -> Result<()> {
        self.stream.close()?;
        Ok(())
    }

    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn read_dir_names(&mut self, _n: i32) -> Result<Vec<String>> {
        Err(Error::InvalidOperation {
            path: self.info.name.clone(),
        })
    }
}

/// Inert handle answering metadata queries and refusing data operations
struct FakeFile {
    info: FileInfo,
}

impl File for FakeFile {
    fn read(&mut self, _buf: &mut [u8]) -> Result<usize> {
        Err(Error::InvalidOperation {
            path: self.info.name.clone(),
        })
    }

    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    fn stat(&self) -> Result<FileInfo> {
        Ok(self.info.clone())
    }

    fn read_dir_names(&mut self, _n: i32) -> Result<Vec<String>> {
        Err(Error::InvalidOperation {
            path: self.info.name.clone(),
        })
    }
}

/// Synthetic directory with a static entry list; everything except the
/// listing behaves like a [`FakeFile`]
struct FakeDir {
    entries: Vec<FileInfo>,
    file: FakeFile,
}

impl FakeDir {
    fn new(entries: Vec<FileInfo>, info: FileInfo) -> Self {
        FakeDir {
            entries,
            file: FakeFile { info },
        }
    }
}

impl File for FakeDir {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.file.read(buf)
    }

    fn close(&mut self) -> Result<()> {
        self.file.close()
    }

    fn stat(&self) -> Result<FileInfo> {
        self.file.stat()
    }

    fn read_dir_names(&mut self, n: i32) -> Result<Vec<String>> {
        if n > 0 {
            return Err(Error::NotImplemented(
                "paged directory listing on virtual sources",
            ));
        }
        Ok(self.entries.iter().map(|e| e.name.clone()).collect())
    }
}
