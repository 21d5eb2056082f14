//! Content store: the single source of truth for gallery records.
//!
//! # Responsibility
//! - Hold the live record sequence for the lifetime of a session.
//! - Reconcile the default dataset with the stored snapshot on load.
//! - Apply edits and resets, then mirror them to snapshot storage.
//!
//! # Invariants
//! - The live id set always equals the default dataset's id set, in the
//!   default dataset's order.
//! - In-memory mutations complete before persistence is attempted; storage
//!   failures are logged and never surface to callers.
//! - Confirmation before `reset` is the caller's responsibility.

use crate::model::defaults::default_records;
use crate::model::record::{ContentRecord, PersistedRecord, RecordPatch};
use crate::repo::snapshot_repo::SnapshotStorage;
use log::{debug, error, info, warn};

/// What `ContentStore::load` found in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No snapshot (or an empty one); defaults are live.
    NoSnapshot,
    /// Snapshot merged; `matched` default records had stored overrides.
    Restored { matched: usize },
    /// Snapshot unreadable or malformed; defaults are live.
    Discarded,
}

/// Merges a stored snapshot onto the default dataset.
///
/// For every default record, in default order, the first snapshot record
/// with the same id is overlaid via `ContentRecord::merged`; defaults
/// without a stored counterpart are kept as-is. Snapshot records whose id
/// is not in `defaults` are dropped.
pub fn reconcile(defaults: &[ContentRecord], snapshot: &[PersistedRecord]) -> Vec<ContentRecord> {
    defaults
        .iter()
        .map(|base| {
            snapshot
                .iter()
                .find(|stored| stored.id == base.id)
                .map_or_else(|| base.clone(), |stored| base.merged(&stored.overrides))
        })
        .collect()
}

/// Explicitly constructed record store over a snapshot backend.
pub struct ContentStore<S: SnapshotStorage> {
    storage: S,
    defaults: Vec<ContentRecord>,
    records: Vec<ContentRecord>,
}

impl<S: SnapshotStorage> ContentStore<S> {
    /// Creates a store serving the shipped default dataset.
    ///
    /// Storage is not consulted until `load` runs.
    pub fn new(storage: S) -> Self {
        Self::with_defaults(storage, default_records().to_vec())
    }

    /// Creates a store serving a caller-provided default dataset.
    pub fn with_defaults(storage: S, defaults: Vec<ContentRecord>) -> Self {
        Self {
            storage,
            records: defaults.clone(),
            defaults,
        }
    }

    /// `new` followed by `load`.
    pub fn open(storage: S) -> Self {
        let mut store = Self::new(storage);
        store.load();
        store
    }

    /// Replaces the live sequence with defaults reconciled against storage.
    ///
    /// Never fails: unreadable or malformed snapshots fall back to defaults.
    pub fn load(&mut self) -> LoadOutcome {
        let snapshot = match self.storage.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("event=store_load module=store status=discarded error={err}");
                self.records = self.defaults.clone();
                return LoadOutcome::Discarded;
            }
        };

        match snapshot {
            Some(snapshot) if !snapshot.is_empty() => {
                let matched = self
                    .defaults
                    .iter()
                    .filter(|base| snapshot.iter().any(|stored| stored.id == base.id))
                    .count();
                self.records = reconcile(&self.defaults, &snapshot);
                info!(
                    "event=store_load module=store status=ok source=snapshot matched={matched} stored={}",
                    snapshot.len()
                );
                LoadOutcome::Restored { matched }
            }
            _ => {
                self.records = self.defaults.clone();
                info!("event=store_load module=store status=ok source=defaults");
                LoadOutcome::NoSnapshot
            }
        }
    }

    /// Live records in default dataset order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&ContentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// The default dataset this store reconciles against.
    pub fn defaults(&self) -> &[ContentRecord] {
        &self.defaults
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Merges `patch` into the record with `id` and persists the sequence.
    ///
    /// An unknown `id` is a silent no-op: nothing changes and nothing is
    /// written.
    pub fn update(&mut self, id: &str, patch: &RecordPatch) {
        let Some(record) = self.records.iter_mut().find(|record| record.id == id) else {
            debug!("event=store_update module=store status=skipped reason=unknown_id id={id}");
            return;
        };
        record.apply(patch);
        debug!("event=store_update module=store status=ok id={id}");
        self.persist();
    }

    /// Restores the default dataset and clears the stored snapshot.
    pub fn reset(&mut self) {
        self.records = self.defaults.clone();
        match self.storage.clear() {
            Ok(()) => info!("event=store_reset module=store status=ok"),
            Err(err) => error!("event=store_reset module=store status=error error={err}"),
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.records) {
            error!("event=store_persist module=store status=error error={err}");
        }
    }
}
