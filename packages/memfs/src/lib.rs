//! # repofs-memfs
//!
//! In-memory implementation of the repofs [`repofs_core::FileSystem`]
//! interface, for demos and for exercising hosts without a server.
//!
//! Where the remote client defers every decision to the repository service,
//! this variant enforces filesystem semantics itself: create/overwrite flags
//! are honored, stats carry real sizes and millisecond timestamps, and
//! directory listings preserve insertion order. Mutations surface through a
//! debounced, batched change-event stream.

mod entry;
mod fs;
mod notify;

pub use entry::{DirNode, Entry, FileNode};
pub use fs::MemFs;
pub use notify::{ChangeNotifier, DEFAULT_DEBOUNCE};
