//! Admin edit flow boundary.
//!
//! # Responsibility
//! - Gate editing behind the shared PIN.
//! - Turn local image files into inline payload strings.
//! - Hold per-record drafts outside the store and commit them on request.
//! - Ask for confirmation before resetting the store.
//!
//! # Invariants
//! - Oversized or non-image uploads are rejected before reaching the store.
//! - The store never sees drafts; it only receives committed patches.

use crate::repo::snapshot_repo::SnapshotStorage;
use crate::service::content_store::ContentStore;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod draft;
pub mod gate;
pub mod image;

pub use draft::RecordDraft;
pub use gate::{AdminGate, AdminSession, DEFAULT_ADMIN_PIN};
pub use image::{encode_image_bytes, encode_image_file, mime_for_path, MAX_IMAGE_BYTES};

/// Prompt shown before a reset is carried out.
pub const RESET_CONFIRMATION_PROMPT: &str =
    "Are you sure you want to reset all data to defaults? This cannot be undone.";

/// Admin boundary errors. All of them are user-facing notices.
#[derive(Debug)]
pub enum AdminError {
    IncorrectPin,
    ImageTooLarge { size: u64, limit: u64 },
    UnsupportedImageType(String),
    Io(std::io::Error),
    UnknownSubRecord { record_id: String, sub_id: String },
}

impl Display for AdminError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IncorrectPin => write!(f, "Incorrect password"),
            Self::ImageTooLarge { size, limit } => write!(
                f,
                "File is too large ({size} bytes). Please select an image under {} MB.",
                limit / (1024 * 1024)
            ),
            Self::UnsupportedImageType(name) => {
                write!(f, "unsupported image type: `{name}`")
            }
            Self::Io(err) => write!(f, "failed to read image: {err}"),
            Self::UnknownSubRecord { record_id, sub_id } => {
                write!(f, "record {record_id} has no sub-item {sub_id}")
            }
        }
    }
}

impl Error for AdminError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AdminError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Resets `store` to defaults if `confirm` accepts the reset prompt.
///
/// Returns whether the reset happened.
pub fn reset_with_confirmation<S: SnapshotStorage>(
    _session: &AdminSession,
    store: &mut ContentStore<S>,
    confirm: impl FnOnce(&str) -> bool,
) -> bool {
    if !confirm(RESET_CONFIRMATION_PROMPT) {
        info!("event=admin_reset module=admin status=cancelled");
        return false;
    }
    store.reset();
    true
}

#[cfg(test)]
mod tests {
    use super::{reset_with_confirmation, AdminError, AdminGate, RESET_CONFIRMATION_PROMPT};
    use crate::model::record::{ContentRecord, RecordPatch};
    use crate::repo::memory_snapshot_repo::MemorySnapshotRepository;
    use crate::service::content_store::ContentStore;

    #[test]
    fn declined_reset_keeps_edits() {
        let session = AdminGate::default().unlock("2255").unwrap();
        let mut store = ContentStore::with_defaults(
            MemorySnapshotRepository::new(),
            vec![ContentRecord::new("a", "Archway", "d1", "u1")],
        );
        store.update("a", &RecordPatch::default().description("edited"));

        let mut asked = String::new();
        let reset = reset_with_confirmation(&session, &mut store, |prompt| {
            asked = prompt.to_string();
            false
        });

        assert!(!reset);
        assert_eq!(asked, RESET_CONFIRMATION_PROMPT);
        assert_eq!(store.records()[0].description, "edited");
        assert!(store.storage().raw().is_some());
    }

    #[test]
    fn image_too_large_message_mentions_limit_in_megabytes() {
        let err = AdminError::ImageTooLarge {
            size: 3 * 1024 * 1024,
            limit: 2 * 1024 * 1024,
        };
        assert!(err.to_string().contains("under 2 MB"));
    }
}
