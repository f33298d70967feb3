//! Change events and the batched sink collaborator.

use serde::{Deserialize, Serialize};

/// What happened to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Changed,
    Deleted,
}

/// One change to one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub path: String,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, path: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }
}

/// Receives coalesced batches of change events.
///
/// Backends that observe mutations locally buffer events and deliver them
/// here in batches, so a burst of writes does not flood the consumer.
pub trait ChangeSink: Send + Sync {
    fn publish(&self, batch: Vec<ChangeEvent>);
}

/// A sink that drops every batch.
pub struct NoSink;

impl ChangeSink for NoSink {
    fn publish(&self, _batch: Vec<ChangeEvent>) {}
}
