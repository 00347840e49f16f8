//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical record accepted by store and query layers.
//! - Define create/patch/import request shapes used by store operations.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `created_at` is set once at creation and never changes.
//! - `updated_at` is absent until the first mutation after creation.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Stored as text because imported records may carry externally minted ids.
pub type RecordId = String;

/// Canonical user-managed record.
///
/// Field names are serialized in camelCase to keep exported documents
/// readable by the same import path that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Stable global ID used for lookups, merge-import and auditing.
    pub id: RecordId,
    /// Human title. Non-empty for records accepted by `create`.
    pub title: String,
    /// Grouping and filter key. Non-empty for records accepted by `create`.
    pub category: String,
    /// Person responsible for the record. Empty when unassigned.
    #[serde(default)]
    pub owner: String,
    /// ISO calendar date (`YYYY-MM-DD`) or empty when undated.
    #[serde(default)]
    pub date: String,
    /// Free-form description. Empty when not provided.
    #[serde(default)]
    pub description: String,
    /// ISO-8601 UTC creation timestamp. Immutable after assignment.
    pub created_at: String,
    /// ISO-8601 UTC timestamp of the latest mutation. `None` until the
    /// record is first updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Input for creating a new record.
///
/// The store assigns `id` and `created_at`; callers never supply them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecord {
    pub title: String,
    pub category: String,
    pub owner: String,
    pub date: String,
    pub description: String,
}

/// Field-wise merge patch for updating an existing record.
///
/// `None` leaves the stored value untouched. `Some` overwrites it, including
/// `Some(String::new())`: the update path intentionally does not re-validate
/// required fields, mirroring the permissive edit flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub category: Option<String>,
    pub owner: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Partial record shape accepted from import documents.
///
/// Every field is optional; the store normalizes missing values before the
/// seed enters the list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSeed {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Validation failure for record create input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    /// `title` was missing, empty or whitespace-only.
    EmptyTitle,
    /// `category` was missing, empty or whitespace-only.
    EmptyCategory,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "record title must not be empty"),
            Self::EmptyCategory => write!(f, "record category must not be empty"),
        }
    }
}

impl Error for RecordValidationError {}

impl NewRecord {
    /// Checks the create-time required fields.
    ///
    /// Whitespace-only values count as empty. Optional fields are never
    /// validated here.
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.title.trim().is_empty() {
            return Err(RecordValidationError::EmptyTitle);
        }
        if self.category.trim().is_empty() {
            return Err(RecordValidationError::EmptyCategory);
        }
        Ok(())
    }
}

impl Record {
    /// Applies a merge patch in place without touching identity fields.
    ///
    /// `id` and `created_at` are never affected; the caller stamps
    /// `updated_at` separately after a successful merge.
    pub fn apply_patch(&mut self, patch: &RecordPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(category) = &patch.category {
            self.category = category.clone();
        }
        if let Some(owner) = &patch.owner {
            self.owner = owner.clone();
        }
        if let Some(date) = &patch.date {
            self.date = date.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
    }
}

/// Returns the current UTC time as an ISO-8601 string with millisecond
/// precision, e.g. `2026-08-29T12:34:56.789Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generates a fresh random record id.
///
/// Callers that hold the full list must still reject collisions against
/// existing ids before accepting the value.
pub fn generate_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}
