//! SQLite-backed snapshot slot.
//!
//! # Responsibility
//! - Keep the snapshot as one row of the `kv_slots` table.
//! - Keep SQL details inside the persistence boundary.

use crate::model::record::{ContentRecord, PersistedRecord};
use crate::repo::snapshot_repo::{
    decode_snapshot, encode_snapshot, RepoResult, SnapshotStorage, SNAPSHOT_KEY,
};
use rusqlite::{params, Connection, OptionalExtension};

/// Snapshot storage in a migrated SQLite database.
pub struct SqliteSnapshotRepository<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteSnapshotRepository<'conn> {
    /// Uses the default `SNAPSHOT_KEY` slot.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, SNAPSHOT_KEY)
    }

    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw slot text, if any. Mostly useful for diagnostics.
    pub fn raw(&self) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl SnapshotStorage for SqliteSnapshotRepository<'_> {
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>> {
        match self.raw()? {
            Some(raw) => decode_snapshot(&raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, records: &[ContentRecord]) -> RepoResult<()> {
        let encoded = encode_snapshot(records)?;
        self.conn.execute(
            "INSERT INTO kv_slots (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![self.key.as_str(), encoded],
        )?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM kv_slots WHERE key = ?1;", [self.key.as_str()])?;
        Ok(())
    }
}
