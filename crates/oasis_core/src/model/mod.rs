//! Content domain model.
//!
//! # Responsibility
//! - Define the canonical gallery record shape and its storage encoding.
//! - Ship the default dataset that seeds and structures the gallery.
//!
//! # Invariants
//! - Records are identified by stable string ids that are never regenerated.
//! - Records are never created or deleted at runtime; only mutable fields
//!   (`description`, `image`, sub-record images) change.

pub mod defaults;
pub mod record;
