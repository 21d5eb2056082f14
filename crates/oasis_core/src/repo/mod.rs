//! Durable snapshot storage.
//!
//! # Responsibility
//! - Define the single-slot load/save/clear contract used by the store.
//! - Provide SQLite, JSON-file and in-memory implementations.
//!
//! # Invariants
//! - Backends return semantic errors (`InvalidData`) in addition to
//!   transport errors; deciding how to degrade is the caller's job.

pub mod file_snapshot_repo;
pub mod memory_snapshot_repo;
pub mod snapshot_repo;
pub mod sqlite_snapshot_repo;
