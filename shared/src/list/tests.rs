use super::*;
use crate::error::ListError;
use rstest::{fixture, rstest};

// =========================================================
// Test entity
// =========================================================

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: EntityId,
    name: &'static str,
    kind: &'static str,
    score: f64,
    seen: CalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RowField {
    Name,
    Kind,
    Score,
    Seen,
}

impl SortField for RowField {
    const ALL: &'static [Self] = &[RowField::Name, RowField::Kind, RowField::Score, RowField::Seen];

    fn key(&self) -> &'static str {
        match self {
            RowField::Name => "name",
            RowField::Kind => "kind",
            RowField::Score => "score",
            RowField::Seen => "last-seen",
        }
    }

    fn label(&self) -> &'static str {
        self.key()
    }
}

impl ListEntity for Row {
    type Field = RowField;
    const SEARCHABLE: &'static [RowField] = &[RowField::Name];

    fn id(&self) -> EntityId {
        self.id
    }

    fn field(&self, field: RowField) -> FieldValue<'_> {
        match field {
            RowField::Name => FieldValue::Text(self.name),
            RowField::Kind => FieldValue::Text(self.kind),
            RowField::Score => FieldValue::Number(self.score),
            RowField::Seen => FieldValue::Date(self.seen),
        }
    }
}

fn row(id: EntityId, name: &'static str, kind: &'static str, score: f64, seen: &str) -> Row {
    Row {
        id,
        name,
        kind,
        score,
        seen: CalendarDate::parse(seen).unwrap(),
    }
}

fn ids(rows: &[Row]) -> Vec<EntityId> {
    rows.iter().map(|r| r.id).collect()
}

#[fixture]
fn rows() -> Vec<Row> {
    vec![
        row(1, "banana", "fruit", 9.0, "2024-03-01"),
        row(2, "Apple", "fruit", 10.0, "2023-12-31"),
        row(3, "carrot", "veg", 2.5, "2024-01-15"),
        row(4, "apricot", "fruit", 10.0, "2024-02-29"),
    ]
}

fn by(field: RowField, direction: SortDirection) -> FilterSortDescriptor<RowField> {
    FilterSortDescriptor::new(field, direction)
}

// =========================================================
// Engine
// =========================================================

#[test]
fn ties_keep_original_order() {
    let rows = vec![
        row(1, "B", "x", 0.0, "2024-01-01"),
        row(2, "A", "x", 0.0, "2024-01-01"),
        row(3, "A", "x", 0.0, "2024-01-01"),
    ];
    let out = apply(&rows, &by(RowField::Name, SortDirection::Asc));
    assert_eq!(ids(&out), vec![2, 3, 1]);
}

#[rstest]
fn descending_reverses_comparator_but_not_ties(rows: Vec<Row>) {
    let out = apply(&rows, &by(RowField::Score, SortDirection::Desc));
    // Apple and apricot tie on 10.0 and stay in collection order
    assert_eq!(ids(&out), vec![2, 4, 1, 3]);
}

#[rstest]
#[case(RowField::Name, vec![2, 4, 1, 3])]
#[case(RowField::Score, vec![3, 1, 2, 4])]
#[case(RowField::Seen, vec![2, 3, 4, 1])]
#[case(RowField::Kind, vec![1, 2, 4, 3])]
fn ascending_sort_uses_typed_comparator(
    rows: Vec<Row>,
    #[case] field: RowField,
    #[case] expected: Vec<EntityId>,
) {
    assert_eq!(ids(&apply(&rows, &by(field, SortDirection::Asc))), expected);
}

#[test]
fn numbers_are_not_compared_as_text() {
    let rows = vec![row(1, "a", "x", 100.0, "2024-01-01"), row(2, "b", "x", 9.0, "2024-01-01")];
    assert_eq!(ids(&apply(&rows, &by(RowField::Score, SortDirection::Asc))), vec![2, 1]);
}

#[rstest]
fn empty_search_keeps_everything(rows: Vec<Row>) {
    let out = apply(&rows, &by(RowField::Name, SortDirection::Asc).with_search(""));
    assert_eq!(out.len(), rows.len());
}

#[rstest]
#[case("AP", vec![2, 4])]
#[case("rro", vec![3])]
#[case("fruit", vec![])]
fn search_is_case_insensitive_over_searchable_fields(
    rows: Vec<Row>,
    #[case] term: &str,
    #[case] expected: Vec<EntityId>,
) {
    let out = apply(&rows, &by(RowField::Name, SortDirection::Asc).with_search(term));
    assert_eq!(ids(&out), expected);
}

#[rstest]
fn filters_compose_with_search(rows: Vec<Row>) {
    let descriptor = by(RowField::Name, SortDirection::Asc)
        .with_search("a")
        .with_filter(RowField::Kind, FilterValue::from_option("fruit"))
        .with_filter(RowField::Score, FilterValue::from_option("10"));
    assert_eq!(ids(&apply(&rows, &descriptor)), vec![2, 4]);
}

#[rstest]
fn all_sentinel_keeps_dimension(rows: Vec<Row>) {
    let descriptor = by(RowField::Name, SortDirection::Asc)
        .with_filter(RowField::Kind, FilterValue::from_option(ALL_SENTINEL));
    assert_eq!(apply(&rows, &descriptor).len(), rows.len());
}

#[rstest]
fn categorical_filter_is_exact(rows: Vec<Row>) {
    let descriptor = by(RowField::Name, SortDirection::Asc)
        .with_filter(RowField::Kind, FilterValue::Is("Fruit".to_string()));
    assert!(apply(&rows, &descriptor).is_empty());
}

#[rstest]
fn apply_is_idempotent_and_pure(rows: Vec<Row>) {
    let snapshot = rows.clone();
    let descriptor = by(RowField::Seen, SortDirection::Desc).with_search("a");
    let first = apply(&rows, &descriptor);
    let second = apply(&rows, &descriptor);
    assert_eq!(first, second);
    assert_eq!(rows, snapshot);
}

#[rstest]
fn distinct_values_start_with_all(rows: Vec<Row>) {
    assert_eq!(distinct_values(&rows, RowField::Kind), vec!["All", "fruit", "veg"]);
    assert_eq!(distinct_values(&rows, RowField::Score), vec!["All", "9", "10", "2.5"]);
}

// =========================================================
// Descriptor
// =========================================================

#[test]
fn toggle_flips_then_resets_on_new_field() {
    let mut d = by(RowField::Name, SortDirection::Asc);
    d.toggle_sort(RowField::Name);
    assert_eq!(d.sort_direction, SortDirection::Desc);
    d.toggle_sort(RowField::Name);
    assert_eq!(d.sort_direction, SortDirection::Asc);
    d.toggle_sort(RowField::Name);
    d.toggle_sort(RowField::Score);
    assert_eq!((d.sort_field, d.sort_direction), (RowField::Score, SortDirection::Asc));
}

#[test]
fn sort_keys_round_trip_and_reject_garbage() {
    let mut d = by(RowField::Name, SortDirection::Asc);
    assert!(d.apply_sort_key("last-seen-desc"));
    assert_eq!((d.sort_field, d.sort_direction), (RowField::Seen, SortDirection::Desc));
    assert_eq!(d.sort_key(), "last-seen-desc");

    let before = d.clone();
    assert!(!d.apply_sort_key("price-up"));
    assert!(!d.apply_sort_key("nonsense"));
    assert_eq!(d, before);
}

#[test]
fn indicator_only_on_active_column() {
    let d = by(RowField::Score, SortDirection::Desc);
    assert_eq!(d.sort_indicator(RowField::Score), Some("↓"));
    assert_eq!(d.sort_indicator(RowField::Name), None);
    assert_eq!(d.filter(RowField::Kind), &FilterValue::All);
}

// =========================================================
// Collection
// =========================================================

#[rstest]
fn seed_rejects_duplicate_ids(mut rows: Vec<Row>) {
    rows.push(row(2, "dup", "x", 0.0, "2024-01-01"));
    assert_eq!(EntityCollection::from_seed(rows), Err(ListError::DuplicateId(2)));
}

#[rstest]
fn create_assigns_one_past_max_id(rows: Vec<Row>) {
    let mut collection = EntityCollection::from_seed(rows).unwrap();
    collection.remove(4).unwrap();
    let id = collection.create(|id| row(id, "date", "fruit", 1.0, "2024-04-01")).unwrap();
    assert_eq!(id, 4);
    collection.remove(2).unwrap();
    let next = collection.create(|id| row(id, "fig", "fruit", 1.0, "2024-04-01")).unwrap();
    assert_eq!(next, 5);
    assert_eq!(collection.len(), 4);
}

#[rstest]
fn update_and_remove_report_missing_ids(rows: Vec<Row>) {
    let mut collection = EntityCollection::from_seed(rows).unwrap();
    collection.update(3, |r| r.score = 4.0).unwrap();
    assert_eq!(collection.get(3).map(|r| r.score), Some(4.0));
    assert_eq!(collection.update(42, |_| {}), Err(ListError::NotFound(42)));
    assert_eq!(collection.remove(42), Err(ListError::NotFound(42)));
}

#[rstest]
fn edits_cannot_duplicate_an_id(rows: Vec<Row>) {
    let mut collection = EntityCollection::from_seed(rows).unwrap();
    let before = collection.clone();

    assert_eq!(
        collection.create(|_| row(1, "clash", "fruit", 1.0, "2024-04-01")),
        Err(ListError::DuplicateId(1))
    );
    assert_eq!(
        collection.update(3, |r| {
            r.id = 2;
            r.score = 9.0;
        }),
        Err(ListError::DuplicateId(2))
    );
    assert_eq!(collection, before);
}

#[test]
fn empty_collection_starts_at_one() {
    let collection: EntityCollection<Row> = EntityCollection::default();
    assert_eq!(collection.next_id(), 1);
    assert!(collection.is_empty());
}
