//! Core use-case services.
//!
//! # Responsibility
//! - Own the live record sequence and its reconciliation with storage.
//! - Keep view and admin layers decoupled from storage details.

pub mod content_store;
