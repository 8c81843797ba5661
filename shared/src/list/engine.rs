use super::descriptor::{ALL_SENTINEL, FilterSortDescriptor, FilterValue, SortDirection};
use super::ListEntity;
use std::cmp::Ordering;

/// Text search and categorical filters, evaluated together.
pub fn matches<E: ListEntity>(entity: &E, descriptor: &FilterSortDescriptor<E::Field>) -> bool {
    let needle = descriptor.search_term.to_lowercase();
    let text_ok = needle.is_empty()
        || E::SEARCHABLE
            .iter()
            .any(|f| entity.field(*f).contains_lowercase(&needle));

    text_ok
        && descriptor
            .active_filters
            .iter()
            .all(|(field, value)| match value {
                FilterValue::All => true,
                FilterValue::Is(expected) => entity.field(*field).matches(expected),
            })
}

/// Comparator for `field`, honouring direction.
pub fn compare_by<E: ListEntity>(a: &E, b: &E, field: E::Field, direction: SortDirection) -> Ordering {
    let ordering = a.field(field).compare(&b.field(field));
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Filters then stably sorts, borrowing rows from `collection`.
pub fn apply_refs<'a, E: ListEntity>(
    collection: &'a [E],
    descriptor: &FilterSortDescriptor<E::Field>,
) -> Vec<&'a E> {
    let mut rows: Vec<&E> = collection
        .iter()
        .filter(|e| matches(*e, descriptor))
        .collect();
    // slice::sort_by is stable: equal keys keep collection order
    rows.sort_by(|a, b| compare_by(*a, *b, descriptor.sort_field, descriptor.sort_direction));
    rows
}

/// Owned variant of [`apply_refs`] for view layers that keep the result.
pub fn apply<E: ListEntity + Clone>(
    collection: &[E],
    descriptor: &FilterSortDescriptor<E::Field>,
) -> Vec<E> {
    apply_refs(collection, descriptor)
        .into_iter()
        .cloned()
        .collect()
}

/// Dropdown options for a filter: `"All"` followed by each distinct value in
/// first-seen order.
pub fn distinct_values<E: ListEntity>(collection: &[E], field: E::Field) -> Vec<String> {
    let mut options = vec![ALL_SENTINEL.to_string()];
    for entity in collection {
        let value = entity.field(field).to_display_string();
        if !options.contains(&value) {
            options.push(value);
        }
    }
    options
}
