//! Pure query entry points over record snapshots.
//!
//! # Responsibility
//! - Derive display views (filter + sort) without touching store state.
//! - Shape summary data for reporting.

pub mod summary;
pub mod view;
