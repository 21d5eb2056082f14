//! In-process snapshot slot.
//!
//! Stores encoded text rather than records so it goes through the same codec
//! as durable backends and can be seeded with corrupt content.

use crate::model::record::{ContentRecord, PersistedRecord};
use crate::repo::snapshot_repo::{decode_snapshot, encode_snapshot, RepoResult, SnapshotStorage};
use std::cell::{Cell, RefCell};

/// Snapshot storage that lives for the process only.
#[derive(Debug, Default)]
pub struct MemorySnapshotRepository {
    slot: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `raw` already in the slot, valid or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
            writes: Cell::new(0),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of successful `save` calls.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SnapshotStorage for MemorySnapshotRepository {
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode_snapshot(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, records: &[ContentRecord]) -> RepoResult<()> {
        let encoded = encode_snapshot(records)?;
        *self.slot.borrow_mut() = Some(encoded);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.slot.borrow_mut().take();
        Ok(())
    }
}
