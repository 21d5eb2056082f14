//! JSON-file snapshot slot.
//!
//! # Invariants
//! - The slot is the file at `path`; a missing file is an absent snapshot.
//! - Writes go to a sibling temp file that is renamed over `path`, so a
//!   failed write leaves the previous snapshot intact.

use crate::model::record::{ContentRecord, PersistedRecord};
use crate::repo::snapshot_repo::{decode_snapshot, encode_snapshot, RepoResult, SnapshotStorage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot storage in a single JSON file.
pub struct FileSnapshotRepository {
    path: PathBuf,
}

impl FileSnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl SnapshotStorage for FileSnapshotRepository {
    fn load(&self) -> RepoResult<Option<Vec<PersistedRecord>>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        decode_snapshot(&raw).map(Some)
    }

    fn save(&self, records: &[ContentRecord]) -> RepoResult<()> {
        let encoded = encode_snapshot(records)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        fs::write(&temp, encoded)?;
        fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> RepoResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
