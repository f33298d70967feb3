//! repofs: a virtual filesystem over HTTP-addressable document repositories.
//!
//! One interface, two backends: [`RemoteFs`] speaks the repository's file
//! API over HTTP (credentials, anti-forgery tokens, retry, error mapping),
//! and [`MemFs`] keeps a process-local tree with batched change
//! notification. Hosts program against [`FileSystem`] and the collaborator
//! traits ([`CredentialPrompt`], [`ChangeSink`]).

pub use repofs_core::{
    address, ChangeEvent, ChangeKind, ChangeSink, CredentialPrompt, FileKind, FileStat,
    FileSystem, FsError, NoPrompt, NoSink, RenameOptions, WriteOptions,
};
pub use repofs_http::RemoteFs;
pub use repofs_memfs::MemFs;
