use crate::diff::DiffResult;
use std::sync::Arc;

/// Notifications published by a [`DiffSyncController`](crate::sync::DiffSyncController)
#[derive(Debug, Clone)]
pub enum SyncEvent {
    /// `is_computing` flipped to the given value
    ComputingChanged(bool),
    /// A debounced recomputation finished
    DiffUpdated {
        generation: u64,
        result: Arc<DiffResult>,
    },
}
