//! Domain model for user-managed records.
//!
//! # Responsibility
//! - Define the canonical record shape shared by store, slots and queries.
//! - Keep the JSON wire naming stable for export/import compatibility.
//!
//! # Invariants
//! - Every record is identified by a stable string `id`.
//! - `created_at` is assigned once and never rewritten.

pub mod record;
