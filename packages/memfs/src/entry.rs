//! The in-memory tree.

use std::time::{SystemTime, UNIX_EPOCH};

use indexmap::IndexMap;

use repofs_core::{FileKind, FileStat};

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A node in the tree: a file XOR a directory.
#[derive(Debug, Clone)]
pub enum Entry {
    File(FileNode),
    Directory(DirNode),
}

#[derive(Debug, Clone)]
pub struct FileNode {
    pub data: Vec<u8>,
    pub ctime: u64,
    pub mtime: u64,
}

impl FileNode {
    pub fn new(data: Vec<u8>) -> Self {
        let now = now_millis();
        Self {
            data,
            ctime: now,
            mtime: now,
        }
    }
}

/// Children are kept in insertion order: a listing reports names in the
/// order they were created, not sorted.
#[derive(Debug, Clone)]
pub struct DirNode {
    pub ctime: u64,
    pub mtime: u64,
    pub entries: IndexMap<String, Entry>,
}

impl DirNode {
    pub fn new() -> Self {
        let now = now_millis();
        Self {
            ctime: now,
            mtime: now,
            entries: IndexMap::new(),
        }
    }
}

impl Default for DirNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Entry {
    pub fn kind(&self) -> FileKind {
        match self {
            Entry::File(_) => FileKind::File,
            Entry::Directory(_) => FileKind::Directory,
        }
    }

    /// Unlike the remote variant, the in-memory tree observes real sizes and
    /// timestamps.
    pub fn stat(&self) -> FileStat {
        match self {
            Entry::File(file) => FileStat {
                kind: FileKind::File,
                size: file.data.len() as u64,
                ctime: file.ctime,
                mtime: file.mtime,
            },
            Entry::Directory(dir) => FileStat {
                kind: FileKind::Directory,
                size: 0,
                ctime: dir.ctime,
                mtime: dir.mtime,
            },
        }
    }
}
