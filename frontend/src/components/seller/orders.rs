use crate::components::list_view::{
    EmptyRow, FilterSelect, ListView, Notice, SearchBox, SortSelect, StatCard, StatusBadge, Toast, format_money,
    seeded_page, status_options,
};
use blinkbuy_shared::entity::{DefaultView, Order, OrderField, OrderStats, OrderStatus};
use blinkbuy_shared::fixtures;
use blinkbuy_shared::list::EntityId;
use leptos::prelude::*;

const SORT_OPTIONS: &[(&str, &str)] = &[
    ("date-desc", "Date: Newest First"),
    ("date-asc", "Date: Oldest First"),
    ("total-desc", "Total: High to Low"),
    ("total-asc", "Total: Low to High"),
];

#[component]
pub fn OrdersPage() -> impl IntoView {
    seeded_page(fixtures::orders, |rows| view! { <OrdersTable rows=rows /> })
}

#[component]
fn OrdersTable(rows: Vec<Order>) -> impl IntoView {
    let list = ListView::new(rows, Order::default_view());
    let notice = RwSignal::new(None);
    let stats = Signal::derive(move || list.with_all(OrderStats::of));
    let visible = list.visible();

    let change_status = move |id: EntityId, label: String| {
        let Some(status) = OrderStatus::from_label(&label) else {
            log::warn!("ignoring unknown order status {label:?}");
            return;
        };
        let result = list.update(id, |o| o.status = status);
        notice.set(Some(match result {
            Ok(()) => Notice::success(format!("Order #{id} marked {}", status.label())),
            Err(err) => Notice::error(err.to_string()),
        }));
    };

    view! {
        <Toast notice=notice />
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard title="Total Orders" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="Pending"
                value=Signal::derive(move || stats.get().pending.to_string())
                tone="text-warning"
            />
            <StatCard
                title="Shipped"
                value=Signal::derive(move || stats.get().shipped.to_string())
                tone="text-info"
            />
            <StatCard
                title="Revenue"
                value=Signal::derive(move || format_money(stats.get().revenue))
                tone="text-success"
            />
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-end gap-4">
                    <SearchBox
                        value=list.search_term()
                        on_input=Callback::new(move |term| list.set_search(term))
                        placeholder="Search customer or address"
                    />
                    <FilterSelect
                        label="Status"
                        options=status_options(OrderStatus::ALL.map(|s| s.label()))
                        selected=list.filter_option(OrderField::Status)
                        on_change=Callback::new(move |option: String| list.set_filter(OrderField::Status, &option))
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
                                <th>"Order"</th>
                                <th>"Customer"</th>
                                <th>"Items"</th>
                                <th>"Total"</th>
                                <th>"Date"</th>
                                <th>"Shipping address"</th>
                                <th>"Status"</th>
                                <th>"Update"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=8 message="No orders found" /> }.into_any();
                                }
                                rows.into_iter()
                                    .map(|order| {
                                        let id = order.id;
                                        let current = order.status;
                                        view! {
                                            <tr class="hover">
                                                <td>{format!("#{id}")}</td>
                                                <td class="font-medium">{order.customer.clone()}</td>
                                                <td class="max-w-xs">{order.item_names()}</td>
                                                <td>{format_money(order.total)}</td>
                                                <td>{order.order_date.display_label()}</td>
                                                <td class="max-w-xs truncate">{order.shipping_address.clone()}</td>
                                                <td><StatusBadge label=current.label() /></td>
                                                <td>
                                                    <select
                                                        class="select select-bordered select-sm"
                                                        on:change=move |ev| change_status(id, event_target_value(&ev))
                                                    >
                                                        {OrderStatus::ALL
                                                            .map(|s| {
                                                                view! {
                                                                    <option value=s.label() selected={s == current}>
                                                                        {s.label()}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                                    .into_any()
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
