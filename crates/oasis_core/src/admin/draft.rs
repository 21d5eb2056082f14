//! Per-record edit draft.
//!
//! # Invariants
//! - A draft starts clean and becomes dirty on any edit.
//! - `commit` only reaches the store when the draft is dirty.
//! - Sub-item edits are limited to sub-items the record already has.

use super::{AdminError, AdminSession};
use crate::model::record::{ContentRecord, RecordPatch, SubRecord};
use crate::repo::snapshot_repo::SnapshotStorage;
use crate::service::content_store::ContentStore;
use log::info;

/// Unsaved edits for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    record_id: String,
    description: String,
    image: String,
    sub_items: Vec<SubRecord>,
    dirty: bool,
}

impl RecordDraft {
    pub fn from_record(record: &ContentRecord) -> Self {
        Self {
            record_id: record.id.clone(),
            description: record.description.clone(),
            image: record.image.clone(),
            sub_items: record.sub_items().to_vec(),
            dirty: false,
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn sub_items(&self) -> &[SubRecord] {
        &self.sub_items
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.dirty = true;
    }

    pub fn set_image(&mut self, image: impl Into<String>) {
        self.image = image.into();
        self.dirty = true;
    }

    pub fn set_sub_image(&mut self, sub_id: &str, image: impl Into<String>) -> Result<(), AdminError> {
        let sub = self
            .sub_items
            .iter_mut()
            .find(|sub| sub.id == sub_id)
            .ok_or_else(|| AdminError::UnknownSubRecord {
                record_id: self.record_id.clone(),
                sub_id: sub_id.to_string(),
            })?;
        sub.image = image.into();
        self.dirty = true;
        Ok(())
    }

    /// Drops unsaved edits and mirrors `record` again (e.g. after a reset).
    pub fn sync_from(&mut self, record: &ContentRecord) {
        *self = Self::from_record(record);
    }

    /// Patch carrying every editable field of the draft.
    pub fn to_patch(&self) -> RecordPatch {
        let patch = RecordPatch::default()
            .description(self.description.clone())
            .image(self.image.clone());
        self.sub_items
            .iter()
            .fold(patch, |patch, sub| patch.sub_image(sub.id.clone(), sub.image.clone()))
    }

    /// Sends the draft to `store` if it has unsaved edits.
    ///
    /// Returns whether an update was issued.
    pub fn commit<S: SnapshotStorage>(
        &mut self,
        _session: &AdminSession,
        store: &mut ContentStore<S>,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        store.update(&self.record_id, &self.to_patch());
        self.dirty = false;
        info!(
            "event=admin_commit module=admin status=ok id={}",
            self.record_id
        );
        true
    }
}
