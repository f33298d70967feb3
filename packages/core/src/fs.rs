//! The filesystem operation trait.

use crate::{FileKind, FileStat, FsError};

/// Flags for `write_file`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Create the file if it does not exist.
    pub create: bool,
    /// Replace existing content.
    pub overwrite: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            create: true,
            overwrite: true,
        }
    }
}

/// Flags for `rename`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameOptions {
    /// Replace an existing target.
    pub overwrite: bool,
}

/// File operations over addressed resources.
///
/// Addresses take the form `scheme://[user[:password]@]host/absolute/path`;
/// see [`crate::address::resolve`]. Every operation is an independent unit of
/// work: it completes or fails terminally, with no partial or streamed
/// results. Implementations are safe to share across threads.
///
/// # Object Safety
///
/// This trait is object-safe: hosts can route through `Box<dyn FileSystem>`.
pub trait FileSystem: Send + Sync {
    /// Stat a single resource.
    fn stat(&self, address: &str) -> Result<FileStat, FsError>;

    /// List a directory, one `(name, kind)` pair per child, in the order the
    /// backend reports them.
    fn read_directory(&self, address: &str) -> Result<Vec<(String, FileKind)>, FsError>;

    /// Read full file content.
    fn read_file(&self, address: &str) -> Result<Vec<u8>, FsError>;

    /// Create or replace file content.
    fn write_file(
        &self,
        address: &str,
        content: &[u8],
        options: WriteOptions,
    ) -> Result<(), FsError>;

    /// Move a resource to a new name. Both addresses must point at the same
    /// host.
    fn rename(&self, old: &str, new: &str, options: RenameOptions) -> Result<(), FsError>;

    /// Remove a resource.
    fn delete(&self, address: &str) -> Result<(), FsError>;

    /// Create a subdirectory.
    fn create_directory(&self, address: &str) -> Result<(), FsError>;
}
