//! Content record domain model.
//!
//! # Responsibility
//! - Define the gallery record and its nested sub-records.
//! - Define the partial-field patch accepted by the store and the lenient
//!   shape used to decode stored snapshots.
//! - Own the field-by-field merge rule shared by `update` and reconciliation.
//!
//! # Invariants
//! - `id` and `name` are never changed by a merge.
//! - A merge never adds or removes sub-records; it only replaces the `image`
//!   of sub-records whose id already exists.

use serde::{Deserialize, Serialize};

/// Stable record identifier. Never regenerated.
pub type RecordId = String;

/// Nested child item of a content record (e.g. one game of the games area).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecord {
    /// Unique within the parent's `sub_items`.
    pub id: String,
    /// Display title; not editable.
    pub name: String,
    /// Remote URL or inline `data:` payload.
    pub image: String,
}

impl SubRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
        }
    }
}

/// One editable item of the public gallery.
///
/// Serialized with camelCase names so stored snapshots keep the
/// `subItems` field name used by existing data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: RecordId,
    /// Display title; not editable through the store contract.
    pub name: String,
    pub description: String,
    /// Remote URL or inline `data:` payload. Opaque to the store.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<SubRecord>>,
}

impl ContentRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            image: image.into(),
            sub_items: None,
        }
    }

    /// Attaches nested sub-records, replacing any existing ones.
    pub fn with_sub_items(mut self, sub_items: Vec<SubRecord>) -> Self {
        self.sub_items = Some(sub_items);
        self
    }

    /// Sub-records as a slice; empty when absent.
    pub fn sub_items(&self) -> &[SubRecord] {
        self.sub_items.as_deref().unwrap_or(&[])
    }

    pub fn sub_item(&self, sub_id: &str) -> Option<&SubRecord> {
        self.sub_items().iter().find(|sub| sub.id == sub_id)
    }

    /// Overlays the mutable fields carried by `patch` onto this record.
    ///
    /// # Precedence
    /// - `description` / `image`: patch value wins when present.
    /// - `sub_items`: for every existing sub-record, the patch entry with the
    ///   same id supplies `image` when it carries one. Patch entries for
    ///   unknown sub-ids are ignored.
    /// - `id`, `name` and sub-record names always stay as they are.
    pub fn apply(&mut self, patch: &RecordPatch) {
        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(image) = &patch.image {
            self.image.clone_from(image);
        }
        let (Some(existing), Some(patched)) = (self.sub_items.as_mut(), &patch.sub_items) else {
            return;
        };
        for sub in existing.iter_mut() {
            let image = patched
                .iter()
                .find(|candidate| candidate.id == sub.id)
                .and_then(|candidate| candidate.image.as_ref());
            if let Some(image) = image {
                sub.image.clone_from(image);
            }
        }
    }

    /// Returns a copy of this record with `patch` applied.
    pub fn merged(&self, patch: &RecordPatch) -> Self {
        let mut merged = self.clone();
        merged.apply(patch);
        merged
    }
}

/// Partial set of mutable record fields.
///
/// Absent fields leave the target untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<SubRecordPatch>>,
}

impl RecordPatch {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Adds (or replaces) the image override for one sub-record.
    pub fn sub_image(mut self, sub_id: impl Into<String>, image: impl Into<String>) -> Self {
        let sub_id = sub_id.into();
        let image = Some(image.into());
        let sub_items = self.sub_items.get_or_insert_with(Vec::new);
        match sub_items.iter_mut().find(|sub| sub.id == sub_id) {
            Some(existing) => existing.image = image,
            None => sub_items.push(SubRecordPatch { id: sub_id, image }),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.image.is_none() && self.sub_items.is_none()
    }
}

/// Image override for one sub-record.
///
/// Stored snapshots also carry the sub-record `name`; it is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubRecordPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// One record as decoded from a stored snapshot.
///
/// Only `id` is required. Stored `name` values are ignored so the default
/// dataset always supplies structure; every other field is an override.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistedRecord {
    pub id: RecordId,
    #[serde(flatten)]
    pub overrides: RecordPatch,
}

/// Where an `image` value points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    /// External URL (or anything that is not a `data:` payload).
    Remote(&'a str),
    /// Self-contained `data:<mime>;base64,<payload>` value.
    Inline { mime: &'a str, payload_len: usize },
}

impl<'a> ImageSource<'a> {
    pub fn classify(image: &'a str) -> Self {
        let Some(rest) = image.strip_prefix("data:") else {
            return Self::Remote(image);
        };
        match rest.split_once(',') {
            Some((header, payload)) => Self::Inline {
                mime: header.split(';').next().unwrap_or_default(),
                payload_len: payload.len(),
            },
            None => Self::Remote(image),
        }
    }

    /// Short human-readable label; never includes inline payload bytes.
    pub fn label(&self) -> String {
        match self {
            Self::Remote(url) => (*url).to_string(),
            Self::Inline { mime, payload_len } => {
                format!("inline {mime} ({payload_len} base64 chars)")
            }
        }
    }
}
