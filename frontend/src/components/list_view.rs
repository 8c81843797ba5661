//! Building blocks shared by the table pages
//!
//! [`ListView`] wraps a page's collection and its filter/sort descriptor in
//! signals; the widgets below bind to it. Pages read their rows through
//! [`seeded_page`], which suspends until the rows are loaded; the route
//! matcher puts the loading placeholder around every lazy page.

use crate::components::icons::Search;
use blinkbuy_shared::ListError;
use blinkbuy_shared::list::{
    ALL_SENTINEL, EntityCollection, EntityId, FilterSortDescriptor, FilterValue, ListEntity, SortField,
    apply, distinct_values,
};
use leptos::prelude::*;
use std::time::Duration;

const NOTICE_TIMEOUT: Duration = Duration::from_secs(3);

// =========================================================
// Seeding
// =========================================================

/// Loads `seed` as a resource owned by the page and renders `render` with it
/// once ready. Must sit inside a `Suspense`; the route matcher provides it.
pub fn seeded_page<T, V, F>(seed: fn() -> T, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    V: IntoView + 'static,
    F: Fn(T) -> V + Copy + Send + Sync + 'static,
{
    let data = LocalResource::new(move || async move { seed() });
    move || Suspend::new(async move { render(data.await) })
}

#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

// =========================================================
// ListView
// =========================================================

/// Reactive state of one table page
pub struct ListView<E: ListEntity + Send + Sync + 'static> {
    collection: RwSignal<EntityCollection<E>>,
    descriptor: RwSignal<FilterSortDescriptor<E::Field>>,
}

impl<E: ListEntity + Send + Sync + 'static> Clone for ListView<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: ListEntity + Send + Sync + 'static> Copy for ListView<E> {}

impl<E> ListView<E>
where
    E: ListEntity + Clone + Send + Sync + 'static,
{
    /// A seed with duplicate ids is a fixture bug; the page then starts empty.
    pub fn new(rows: Vec<E>, descriptor: FilterSortDescriptor<E::Field>) -> Self {
        let collection = EntityCollection::from_seed(rows).unwrap_or_else(|err| {
            log::error!("rejecting seed data: {err}");
            EntityCollection::default()
        });
        Self {
            collection: RwSignal::new(collection),
            descriptor: RwSignal::new(descriptor),
        }
    }

    /// Rows after search, filters and sort.
    pub fn visible(&self) -> Signal<Vec<E>> {
        let collection = self.collection;
        let descriptor = self.descriptor;
        Signal::derive(move || collection.with(|c| descriptor.with(|d| apply(c.items(), d))))
    }

    /// Runs `f` over every row, ignoring the descriptor; tracked.
    pub fn with_all<R>(&self, f: impl FnOnce(&[E]) -> R) -> R {
        self.collection.with(|c| f(c.items()))
    }

    pub fn total(&self) -> Signal<usize> {
        let collection = self.collection;
        Signal::derive(move || collection.with(|c| c.len()))
    }

    pub fn get(&self, id: EntityId) -> Option<E> {
        self.collection.with_untracked(|c| c.get(id).cloned())
    }

    // ---- descriptor ----

    pub fn search_term(&self) -> Signal<String> {
        let descriptor = self.descriptor;
        Signal::derive(move || descriptor.with(|d| d.search_term.clone()))
    }

    pub fn set_search(&self, term: String) {
        self.descriptor.update(|d| d.search_term = term);
    }

    /// Selected option of a filter dropdown.
    pub fn filter_option(&self, field: E::Field) -> Signal<String> {
        let descriptor = self.descriptor;
        Signal::derive(move || descriptor.with(|d| d.filter(field).as_option().to_string()))
    }

    pub fn set_filter(&self, field: E::Field, option: &str) {
        let value = FilterValue::from_option(option);
        self.descriptor.update(|d| d.set_filter(field, value));
    }

    /// `"All"` plus every value present in the collection.
    pub fn filter_options(&self, field: E::Field) -> Signal<Vec<String>> {
        let collection = self.collection;
        Signal::derive(move || collection.with(|c| distinct_values(c.items(), field)))
    }

    pub fn toggle_sort(&self, field: E::Field) {
        self.descriptor.update(|d| d.toggle_sort(field));
    }

    pub fn sort_key(&self) -> Signal<String> {
        let descriptor = self.descriptor;
        Signal::derive(move || descriptor.with(|d| d.sort_key()))
    }

    pub fn apply_sort_key(&self, key: &str) {
        let applied = self
            .descriptor
            .try_update(|d| d.apply_sort_key(key))
            .unwrap_or(false);
        if !applied {
            log::warn!("ignoring unknown sort option {key:?}");
        }
    }

    /// Clickable column header showing the sort arrow when active.
    pub fn header(&self, field: E::Field) -> impl IntoView + use<E> {
        let list = *self;
        let descriptor = self.descriptor;
        let arrow = move || descriptor.with(|d| d.sort_indicator(field).unwrap_or(""));
        view! {
            <th class="cursor-pointer select-none" on:click=move |_| list.toggle_sort(field)>
                {field.label()} " " {arrow}
            </th>
        }
    }

    // ---- collection edits ----

    /// `None` once the page's collection has been disposed.
    pub fn create(&self, build: impl FnOnce(EntityId) -> E) -> Option<Result<EntityId, ListError>> {
        self.collection.try_update(|c| c.create(build))
    }

    pub fn update(&self, id: EntityId, edit: impl FnOnce(&mut E)) -> Result<(), ListError> {
        self.collection
            .try_update(|c| c.update(id, edit))
            .unwrap_or(Err(ListError::NotFound(id)))
    }

    pub fn remove(&self, id: EntityId) -> Result<E, ListError> {
        self.collection
            .try_update(|c| c.remove(id))
            .unwrap_or(Err(ListError::NotFound(id)))
    }
}

// =========================================================
// Widgets
// =========================================================

/// Options of a filter over a closed status enum: `"All"` then every label,
/// whether or not a row currently has it.
pub fn status_options(labels: impl IntoIterator<Item = &'static str>) -> Vec<String> {
    std::iter::once(ALL_SENTINEL)
        .chain(labels)
        .map(str::to_string)
        .collect()
}

#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="input input-bordered flex items-center gap-2 w-full md:w-80">
            <Search attr:class="h-4 w-4 opacity-50" />
            <input
                type="text"
                class="grow"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn FilterSelect(
    label: &'static str,
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-control w-full md:w-48">
            <div class="label">
                <span class="label-text">{label}</span>
            </div>
            <select
                class="select select-bordered"
                prop:value=selected
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let is_selected = {
                            let option = option.clone();
                            move || selected.get() == option
                        };
                        view! {
                            <option value=option.clone() selected=is_selected>
                                {option.clone()}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}

/// Sort dropdown of the seller pages; options are `("<field>-<dir>", label)`.
#[component]
pub fn SortSelect(
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] selected: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label class="form-control w-full md:w-56">
            <div class="label">
                <span class="label-text">"Sort by"</span>
            </div>
            <select
                class="select select-bordered"
                prop:value=selected
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(key, label)| {
                        view! {
                            <option value=*key selected=move || selected.get() == *key>
                                {*label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional)] description: &'static str,
    /// DaisyUI text color class of the value
    #[prop(default = "text-primary")]
    tone: &'static str,
) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-lg p-6">
            <div class="stat">
                <div class="stat-title">{title}</div>
                <div class=format!("stat-value {tone}")>{value}</div>
                <div class="stat-desc">{description}</div>
            </div>
        </div>
    }
}

#[component]
pub fn EmptyRow(colspan: u32, message: &'static str) -> impl IntoView {
    view! {
        <tr>
            <td colspan=colspan class="text-center py-8 text-base-content/50">
                {message}
            </td>
        </tr>
    }
}

#[component]
pub fn StatusBadge(label: &'static str) -> impl IntoView {
    view! { <span class=format!("badge {}", badge_class(label))>{label}</span> }
}

// =========================================================
// Notifications
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// Numbers shown notices so a countdown only clears the notice it started for.
#[derive(Debug, Default)]
struct Dismissals {
    shown: u64,
}

impl Dismissals {
    fn show(&mut self) -> u64 {
        self.shown += 1;
        self.shown
    }

    fn expires(&self, ticket: u64) -> bool {
        ticket == self.shown
    }
}

/// Toast in the top right corner, cleared a few seconds after the latest
/// notice.
#[component]
pub fn Toast(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    let dismissals = StoredValue::new(Dismissals::default());
    Effect::new(move |_| {
        if notice.with(Option::is_none) {
            return;
        }
        let Some(ticket) = dismissals.try_update_value(Dismissals::show) else {
            return;
        };
        set_timeout(
            move || {
                if dismissals.try_with_value(|d| d.expires(ticket)).unwrap_or(false) {
                    notice.set(None);
                }
            },
            NOTICE_TIMEOUT,
        );
    });

    view! {
        <Show when=move || notice.with(Option::is_some)>
            <div class="toast toast-top toast-end z-50">
                <div class=move || {
                    if notice.with(|n| n.as_ref().is_some_and(|n| n.is_error)) {
                        "alert alert-error shadow-lg"
                    } else {
                        "alert alert-success shadow-lg"
                    }
                }>
                    <span>{move || notice.with(|n| n.as_ref().map(|n| n.message.clone()))}</span>
                </div>
            </div>
        </Show>
    }
}

// =========================================================
// Formatting
// =========================================================

/// DaisyUI badge color for a status label.
pub fn badge_class(label: &str) -> &'static str {
    match label {
        "Active" | "Delivered" | "Resolved" => "badge-success",
        "Pending" => "badge-warning",
        "Shipped" | "Reviewed" => "badge-info",
        "Inactive" | "Out of Stock" | "Cancelled" => "badge-error",
        _ => "badge-ghost",
    }
}

/// `1499.95` -> `$1,499.95`
pub fn format_money(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let (sign, cents) = if cents < 0 { ("-", -cents) } else { ("", cents) };
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}${grouped}.{:02}", cents % 100)
}

/// `4.25` -> `4.3/5`
pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}/5")
}

pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(1499.95), "$1,499.95");
        assert_eq!(format_money(4589.83), "$4,589.83");
        assert_eq!(format_money(89.9), "$89.90");
        assert_eq!(format_money(1_000_000.0), "$1,000,000.00");
        assert_eq!(format_money(-12.5), "-$12.50");
    }

    #[test]
    fn status_options_start_with_all() {
        assert_eq!(status_options(["Pending", "Shipped"]), vec!["All", "Pending", "Shipped"]);
    }

    #[test]
    fn only_the_latest_notice_expires() {
        let mut dismissals = Dismissals::default();
        let first = dismissals.show();
        let second = dismissals.show();
        assert!(!dismissals.expires(first));
        assert!(dismissals.expires(second));
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn unknown_status_gets_neutral_badge() {
        assert_eq!(badge_class("Delivered"), "badge-success");
        assert_eq!(badge_class("Lost"), "badge-ghost");
    }
}
