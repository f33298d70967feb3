//! Remote metadata descriptors and operation payloads.
//!
//! Decoded fresh from server JSON on every call, never cached. The live
//! service decorates descriptors with location and attribute fields this
//! client does not consume; unknown fields are ignored on decode.

use serde::{Deserialize, Serialize};

use repofs_core::{FileKind, FileStat};

/// Metadata descriptor returned by `GET /file/{path}?parts=meta`.
///
/// The `Directory` flag is the file-XOR-directory discriminator.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceMeta {
    #[serde(default)]
    pub name: String,
    pub directory: bool,
}

impl ResourceMeta {
    pub fn kind(&self) -> FileKind {
        if self.directory {
            FileKind::Directory
        } else {
            FileKind::File
        }
    }

    /// Stat for this descriptor. Size and timestamps are reported as zero:
    /// this metadata variant does not expose them reliably.
    pub fn stat(&self) -> FileStat {
        FileStat::bare(self.kind())
    }
}

/// Directory descriptor returned by `GET /file/{path}?depth=1` on a
/// directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DirectoryInfo {
    #[serde(default)]
    pub name: String,
    pub directory: bool,
    #[serde(default)]
    pub children: Vec<ChildEntry>,
}

impl DirectoryInfo {
    /// One `(name, kind)` pair per child, server response order preserved
    /// verbatim.
    pub fn entries(&self) -> Vec<(String, FileKind)> {
        self.children
            .iter()
            .map(|child| (child.name.clone(), child.kind()))
            .collect()
    }
}

/// One child inside a [`DirectoryInfo`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChildEntry {
    pub name: String,
    #[serde(default)]
    pub directory: bool,
}

impl ChildEntry {
    pub fn kind(&self) -> FileKind {
        if self.directory {
            FileKind::Directory
        } else {
            FileKind::File
        }
    }
}

/// Body of the move/rename POST against the target's parent collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MoveRequest {
    /// Absolute source path; host-local, cross-host moves are unsupported.
    pub location: String,
    /// New base name under the target collection.
    pub target: String,
}

/// Body of the create-directory POST against the parent collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewDirectoryRequest {
    pub name: String,
    pub directory: bool,
}
