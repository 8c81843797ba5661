//! List-view filter/sort engine
//!
//! Every table page (users, products, feedback, orders, customers) runs its
//! rows through the same pipeline: text search, categorical filters, then a
//! stable sort. Entities describe themselves through [`ListEntity`], with a
//! closed [`SortField`] enum per entity type so an unknown field name cannot
//! reach the engine.

mod collection;
mod descriptor;
mod engine;

#[cfg(test)]
mod tests;

pub use collection::EntityCollection;
pub use descriptor::{ALL_SENTINEL, FilterSortDescriptor, FilterValue, SortDirection};
pub use engine::{apply, apply_refs, compare_by, distinct_values, matches};

use crate::date::CalendarDate;
use std::cmp::Ordering;
use std::fmt::Debug;

/// Identity of a row, unique within its collection
pub type EntityId = u32;

// =========================================================
// Field values
// =========================================================

/// Typed view of one field, selecting the comparator used for it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Compared case-insensitively
    Text(&'a str),
    /// Compared numerically
    Number(f64),
    /// Compared chronologically
    Date(CalendarDate),
}

impl FieldValue<'_> {
    /// Comparator dispatch for the sort step.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => cmp_ignore_case(a, b),
            // one field never yields two kinds; fall back to the text form
            (a, b) => cmp_ignore_case(&a.to_display_string(), &b.to_display_string()),
        }
    }

    /// Case-insensitive substring test; `needle_lower` must already be lowercase.
    pub fn contains_lowercase(&self, needle_lower: &str) -> bool {
        match self {
            FieldValue::Text(s) => s.to_lowercase().contains(needle_lower),
            other => other.to_display_string().to_lowercase().contains(needle_lower),
        }
    }

    /// Exact match against a filter option value.
    pub fn matches(&self, expected: &str) -> bool {
        match self {
            FieldValue::Text(s) => *s == expected,
            FieldValue::Number(n) => expected.trim().parse::<f64>().is_ok_and(|e| e == *n),
            FieldValue::Date(d) => CalendarDate::parse(expected).is_some_and(|e| e == *d),
        }
    }

    pub fn to_display_string(&self) -> String {
        match self {
            FieldValue::Text(s) => s.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Date(d) => d.to_string(),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

// =========================================================
// Entity contract
// =========================================================

/// Closed set of sortable/filterable fields of one entity type
pub trait SortField: Copy + Eq + Ord + Debug + Send + Sync + 'static {
    /// Every field, in column order.
    const ALL: &'static [Self];

    /// Stable machine key, used in `"<key>-<dir>"` sort options.
    fn key(&self) -> &'static str;

    /// Column header text.
    fn label(&self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.key() == key)
    }
}

/// A row of a list view
pub trait ListEntity {
    type Field: SortField;

    /// Fields consulted by the text search.
    const SEARCHABLE: &'static [Self::Field];

    fn id(&self) -> EntityId;

    fn field(&self, field: Self::Field) -> FieldValue<'_>;
}
