use std::ffi::OsString;
use std::fs::{FileType, Metadata};
use std::os::unix::fs::{FileTypeExt, MetadataExt};
use std::time::SystemTime;

const EXEC_BITS: u32 = 0o111;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Link,
    BlockDevice,
    CharDevice,
    Other,
}

impl FileKind {
    pub fn from_file_type(ft: FileType) -> FileKind {
        if ft.is_dir() {
            FileKind::Dir
        } else if ft.is_file() {
            FileKind::File
        } else if ft.is_symlink() {
            FileKind::Link
        } else if ft.is_block_device() {
            FileKind::BlockDevice
        } else if ft.is_char_device() {
            FileKind::CharDevice
        } else {
            FileKind::Other
        }
    }

    pub fn is_device(&self) -> bool {
        matches!(self, FileKind::BlockDevice | FileKind::CharDevice)
    }
}

/// A directory entry together with the stat fields the listing prints.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Raw name bytes as read from the directory stream.
    pub name: OsString,
    pub kind: FileKind,
    /// Permission bits only (`st_mode & 0o777`).
    pub mode: u32,
    pub nlink: u64,
    pub uid: u32,
    pub gid: u32,
    pub size: u64,
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn from_metadata(name: OsString, md: &Metadata) -> Self {
        Self {
            name,
            kind: FileKind::from_file_type(md.file_type()),
            mode: md.mode() & 0o777,
            nlink: md.nlink(),
            uid: md.uid(),
            gid: md.gid(),
            size: md.size(),
            modified: md.modified().unwrap_or(SystemTime::UNIX_EPOCH),
        }
    }

    /// True when any of the owner, group or other execute bits is set.
    pub fn is_executable(&self) -> bool {
        self.mode & EXEC_BITS != 0
    }
}
