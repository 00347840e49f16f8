//! Filtered, sorted projection of the record list.
//!
//! # Responsibility
//! - Apply free-text and category filters over a record snapshot.
//! - Order the filtered view by the requested sort key.
//!
//! # Invariants
//! - The input list is never mutated; the view is a fresh sequence.
//! - Sorting is stable: equal keys keep their filtered order.

use crate::model::record::Record;

/// Sort order for the display view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    DateDesc,
    DateAsc,
    TitleAsc,
    TitleDesc,
    /// Keep the filtered order untouched.
    #[default]
    Unsorted,
}

impl SortKey {
    /// Parses the UI-facing sort selector value.
    ///
    /// Unrecognized values fall back to [`SortKey::Unsorted`].
    pub fn parse(value: &str) -> Self {
        match value {
            "date-desc" => Self::DateDesc,
            "date-asc" => Self::DateAsc,
            "title-asc" => Self::TitleAsc,
            "title-desc" => Self::TitleDesc,
            _ => Self::Unsorted,
        }
    }
}

/// Display query: free text, exact category and sort key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    /// Case-insensitive substring matched against title, owner and
    /// description. Empty disables the filter.
    pub text: String,
    /// Exact category match. Empty disables the filter.
    pub category: String,
    pub sort: SortKey,
}

/// Computes the filtered, sorted view of a record snapshot.
///
/// Pure: returns a new ordered sequence and leaves `records` untouched.
pub fn view(records: &[Record], query: &ViewQuery) -> Vec<Record> {
    let needle = query.text.trim().to_lowercase();

    let mut list: Vec<Record> = records
        .iter()
        .filter(|r| query.category.is_empty() || r.category == query.category)
        .filter(|r| needle.is_empty() || matches_text(r, &needle))
        .cloned()
        .collect();

    match query.sort {
        SortKey::DateDesc => list.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAsc => list.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::TitleAsc => list.sort_by(|a, b| a.title.cmp(&b.title)),
        SortKey::TitleDesc => list.sort_by(|a, b| b.title.cmp(&a.title)),
        SortKey::Unsorted => {}
    }

    list
}

fn matches_text(record: &Record, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.owner.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}
