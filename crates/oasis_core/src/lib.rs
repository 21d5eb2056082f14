//! Core content logic for the Collective Oasis proposal site.
//! This crate is the single source of truth for gallery records and their
//! persistence.

pub mod admin;
pub mod config;
pub mod db;
pub mod export;
pub mod gallery;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use admin::{AdminError, AdminGate, AdminSession, RecordDraft};
pub use config::{ConfigError, StorageBackend, StoreConfig};
pub use export::render_proposal;
pub use gallery::{CardView, DetailView, Gallery};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::defaults::default_records;
pub use model::record::{
    ContentRecord, ImageSource, PersistedRecord, RecordId, RecordPatch, SubRecord, SubRecordPatch,
};
pub use repo::file_snapshot_repo::FileSnapshotRepository;
pub use repo::memory_snapshot_repo::MemorySnapshotRepository;
pub use repo::snapshot_repo::{RepoError, RepoResult, SnapshotStorage, SNAPSHOT_KEY};
pub use repo::sqlite_snapshot_repo::SqliteSnapshotRepository;
pub use service::content_store::{reconcile, ContentStore, LoadOutcome};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
