// crates/engine/src/entry.rs
use std::fs;
use std::io;
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::path::Path;
use std::time::SystemTime;

/// Object-type classification of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Directory,
    Fifo,
    Symlink,
    Socket,
    BlockDevice,
    CharDevice,
    Regular,
    Unknown,
}

impl FileKind {
    /// The type character rendered in position one of the mode string.
    pub fn symbol(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Fifo => 'f',
            Self::Symlink => 'l',
            Self::Socket => 's',
            Self::BlockDevice => 'b',
            Self::CharDevice => 'c',
            Self::Regular => '-',
            Self::Unknown => '?',
        }
    }
}

impl From<fs::FileType> for FileKind {
    fn from(ft: fs::FileType) -> Self {
        if ft.is_dir() {
            Self::Directory
        } else if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_fifo() {
            Self::Fifo
        } else if ft.is_socket() {
            Self::Socket
        } else if ft.is_block_device() {
            Self::BlockDevice
        } else if ft.is_char_device() {
            Self::CharDevice
        } else if ft.is_file() {
            Self::Regular
        } else {
            Self::Unknown
        }
    }
}

/// Immutable metadata snapshot of one filesystem entry, produced fresh per
/// entry and consumed by a single render call.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    pub kind: FileKind,
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: SystemTime,
}

impl EntryInfo {
    pub fn from_metadata(meta: &fs::Metadata) -> io::Result<Self> {
        Ok(Self {
            kind: meta.file_type().into(),
            mode: meta.mode(),
            nlink: meta.nlink(),
            uid: meta.uid(),
            gid: meta.gid(),
            size: meta.len(),
            modified: meta.modified()?,
        })
    }
}

/// Queries metadata for `path`, following symbolic links.
///
/// # Errors
/// Fails when the path does not exist, an intermediate component is not a
/// directory, or permission is denied. Callers attribute the error to the
/// appropriate display name and keep going.
pub fn resolve(path: impl AsRef<Path>) -> io::Result<EntryInfo> {
    let meta = fs::metadata(path)?;
    EntryInfo::from_metadata(&meta)
}
