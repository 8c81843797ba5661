use crate::components::list_view::{
    EmptyRow, ListView, SearchBox, SortSelect, StatCard, format_money, seeded_page,
};
use blinkbuy_shared::entity::{Customer, CustomerStats, DefaultView};
use blinkbuy_shared::fixtures;
use leptos::prelude::*;

const SORT_OPTIONS: &[(&str, &str)] = &[
    ("name-asc", "Name: A-Z"),
    ("name-desc", "Name: Z-A"),
    ("orders-desc", "Orders: High to Low"),
    ("orders-asc", "Orders: Low to High"),
    ("spent-desc", "Spent: High to Low"),
    ("spent-asc", "Spent: Low to High"),
    ("last-order-desc", "Last Order: Newest First"),
    ("last-order-asc", "Last Order: Oldest First"),
];

#[component]
pub fn CustomersPage() -> impl IntoView {
    seeded_page(fixtures::customers, |rows| view! { <CustomersTable rows=rows /> })
}

#[component]
fn CustomersTable(rows: Vec<Customer>) -> impl IntoView {
    let list = ListView::new(rows, Customer::default_view());
    let stats = Signal::derive(move || list.with_all(CustomerStats::of));
    let visible = list.visible();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard title="Customers" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="Orders"
                value=Signal::derive(move || stats.get().orders.to_string())
                tone="text-info"
            />
            <StatCard
                title="Revenue"
                value=Signal::derive(move || format_money(stats.get().revenue))
                tone="text-success"
            />
            <StatCard
                title="Average spend"
                value=Signal::derive(move || format_money(stats.get().average_spend))
                description="Per customer"
                tone="text-secondary"
            />
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-end gap-4">
                    <SearchBox
                        value=list.search_term()
                        on_input=Callback::new(move |term| list.set_search(term))
                        placeholder="Search by name or email"
                    />
                    <SortSelect
                        options=SORT_OPTIONS
                        selected=list.sort_key()
                        on_change=Callback::new(move |key: String| list.apply_sort_key(&key))
                    />
                </div>

                <div class="overflow-x-auto mt-4">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Customer"</th>
                                <th>"Phone"</th>
                                <th>"Orders"</th>
                                <th>"Total spent"</th>
                                <th>"Last order"</th>
                                <th>"Customer since"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show
                                when=move || visible.with(|rows| !rows.is_empty())
                                fallback=|| view! { <EmptyRow colspan=6 message="No customers found" /> }
                            >
                                <For
                                    each=move || visible.get()
                                    key=|c| c.id
                                    children=|c| {
                                        view! {
                                            <tr class="hover">
                                                <td>
                                                    <div class="font-medium">{c.name}</div>
                                                    <div class="text-sm text-base-content/60">{c.email}</div>
                                                </td>
                                                <td>{c.phone}</td>
                                                <td>{c.total_orders}</td>
                                                <td>{format_money(c.total_spent)}</td>
                                                <td>{c.last_order_date.display_label()}</td>
                                                <td>{c.join_date.display_label()}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </Show>
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
