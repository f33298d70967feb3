use serde::{Deserialize, Serialize};

/// A resource is a file or a directory, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

impl FileKind {
    pub fn is_directory(self) -> bool {
        self == FileKind::Directory
    }
}

/// Stat result for a single resource.
///
/// `size` is in bytes; `ctime` and `mtime` are milliseconds since the Unix
/// epoch. Backends that cannot observe these report zero rather than
/// inventing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStat {
    pub kind: FileKind,
    pub size: u64,
    pub ctime: u64,
    pub mtime: u64,
}

impl FileStat {
    /// A stat with all counters zeroed, as reported by backends whose
    /// metadata does not carry size or timestamps.
    pub fn bare(kind: FileKind) -> Self {
        Self {
            kind,
            size: 0,
            ctime: 0,
            mtime: 0,
        }
    }
}
