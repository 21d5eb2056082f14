//! Snapshot storage contract and codec.
//!
//! # Responsibility
//! - Define the load/save/clear contract every durable backend implements.
//! - Encode and decode the single-slot snapshot (JSON array of records).
//!
//! # Invariants
//! - One fixed key holds the entire record sequence.
//! - `save` always overwrites the full sequence.
//! - `clear` removes the slot; clearing an absent slot succeeds.
//! - A slot that cannot be decoded is reported as `RepoError::InvalidData`,
//!   never silently repaired here.

use crate::db::DbError;
use crate::model::record::{ContentRecord, PersistedRecord};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key of the record snapshot slot.
pub const SNAPSHOT_KEY: &str = "tsd_oasis_items";

pub type RepoResult<T> = Result<T, RepoError>;

/// Snapshot storage failures.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    Io(std::io::Error),
    /// Slot content is present but not a valid snapshot.
    InvalidData(String),
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "snapshot io error: {err}"),
            Self::InvalidData(message) => write!(f, "invalid stored snapshot: {message}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::InvalidData(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<std::io::Error> for RepoError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Durable single-slot storage for the record sequence.
pub trait SnapshotStorage {
    /// Reads the stored snapshot. `Ok(None)` when no snapshot exists.
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>>;
    /// Overwrites the slot with the full record sequence.
    fn save(&self, records: &[ContentRecord]) -> RepoResult<()>;
    /// Removes the slot.
    fn clear(&self) -> RepoResult<()>;
}

impl<T: SnapshotStorage + ?Sized> SnapshotStorage for &T {
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>> {
        (**self).load()
    }

    fn save(&self, records: &[ContentRecord]) -> RepoResult<()> {
        (**self).save(records)
    }

    fn clear(&self) -> RepoResult<()> {
        (**self).clear()
    }
}

impl<T: SnapshotStorage + ?Sized> SnapshotStorage for Box<T> {
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>> {
        (**self).load()
    }

    fn save(&self, records: &[ContentRecord]) -> RepoResult<()> {
        (**self).save(records)
    }

    fn clear(&self) -> RepoResult<()> {
        (**self).clear()
    }
}

/// Serializes the full record sequence into slot text.
pub fn encode_snapshot(records: &[ContentRecord]) -> RepoResult<String> {
    serde_json::to_string(records).map_err(RepoError::Encode)
}

/// Parses slot text into persisted records.
///
/// Anything other than a JSON array of objects carrying a string `id` is
/// rejected as `InvalidData`.
pub fn decode_snapshot(raw: &str) -> RepoResult<Vec<PersistedRecord>> {
    serde_json::from_str(raw).map_err(|err| RepoError::InvalidData(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::{decode_snapshot, encode_snapshot, RepoError};
    use crate::model::record::ContentRecord;

    #[test]
    fn encode_uses_camel_case_and_omits_absent_sub_items() {
        let raw = encode_snapshot(&[ContentRecord::new("a", "Archway", "d1", "u1")]).unwrap();
        assert_eq!(
            raw,
            r#"[{"id":"a","name":"Archway","description":"d1","image":"u1"}]"#
        );
    }

    #[test]
    fn decode_rejects_non_array_payloads() {
        for raw in ["{}", "\"text\"", "[{\"name\":\"no id\"}]", "not json", ""] {
            let err = decode_snapshot(raw).unwrap_err();
            assert!(matches!(err, RepoError::InvalidData(_)), "accepted `{raw}`");
        }
    }

    #[test]
    fn decode_accepts_empty_array() {
        assert!(decode_snapshot("[]").unwrap().is_empty());
    }
}
