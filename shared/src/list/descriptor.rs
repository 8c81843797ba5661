use super::SortField;
use std::collections::BTreeMap;

/// Filter option that keeps every row for its dimension
pub const ALL_SENTINEL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }

    /// Header indicator for the active sort column.
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Selected value of one categorical filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FilterValue {
    #[default]
    All,
    Is(String),
}

impl FilterValue {
    /// Maps a dropdown option to a filter value; `"All"` is the sentinel.
    pub fn from_option(option: &str) -> Self {
        if option == ALL_SENTINEL {
            FilterValue::All
        } else {
            FilterValue::Is(option.to_string())
        }
    }

    pub fn as_option(&self) -> &str {
        match self {
            FilterValue::All => ALL_SENTINEL,
            FilterValue::Is(v) => v,
        }
    }
}

/// Search, filter and sort configuration of one table
///
/// Owned by the page and rebuilt on every keystroke or selection; applying it
/// never touches the underlying collection.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSortDescriptor<F: SortField> {
    pub search_term: String,
    pub active_filters: BTreeMap<F, FilterValue>,
    pub sort_field: F,
    pub sort_direction: SortDirection,
}

impl<F: SortField> FilterSortDescriptor<F> {
    pub fn new(sort_field: F, sort_direction: SortDirection) -> Self {
        Self {
            search_term: String::new(),
            active_filters: BTreeMap::new(),
            sort_field,
            sort_direction,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_filter(mut self, field: F, value: FilterValue) -> Self {
        self.set_filter(field, value);
        self
    }

    pub fn set_filter(&mut self, field: F, value: FilterValue) {
        self.active_filters.insert(field, value);
    }

    /// Current value of a filter dimension (`All` when never set).
    pub fn filter(&self, field: F) -> &FilterValue {
        const ALL: &FilterValue = &FilterValue::All;
        self.active_filters.get(&field).unwrap_or(ALL)
    }

    /// Column header click: same field flips direction, a new field starts
    /// ascending.
    pub fn toggle_sort(&mut self, field: F) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
    }

    /// `"<field>-<dir>"` form used by sort dropdowns.
    pub fn sort_key(&self) -> String {
        format!("{}-{}", self.sort_field.key(), self.sort_direction.key())
    }

    /// Applies a `"<field>-<dir>"` option. Returns `false` and leaves the
    /// descriptor unchanged if the key does not parse.
    pub fn apply_sort_key(&mut self, key: &str) -> bool {
        let parsed = key
            .rsplit_once('-')
            .and_then(|(field, dir)| Some((F::from_key(field)?, SortDirection::from_key(dir)?)));
        match parsed {
            Some((field, direction)) => {
                self.sort_field = field;
                self.sort_direction = direction;
                true
            }
            None => false,
        }
    }

    /// Arrow to render next to `field`'s header, if it is the sort column.
    pub fn sort_indicator(&self, field: F) -> Option<&'static str> {
        (self.sort_field == field).then(|| self.sort_direction.arrow())
    }
}
