use crate::components::icons::{Star, Trash2};
use crate::components::list_view::{
    EmptyRow, FilterSelect, ListView, Notice, SearchBox, StatCard, StatusBadge, Toast, format_money,
    seeded_page, status_options,
};
use blinkbuy_shared::entity::{DefaultView, Product, ProductField, ProductStats, ProductStatus};
use blinkbuy_shared::fixtures;
use blinkbuy_shared::list::EntityId;
use leptos::prelude::*;

/// Every product in the marketplace, across sellers
#[component]
pub fn ProductsPage() -> impl IntoView {
    seeded_page(fixtures::admin_products, |rows| view! { <ProductsTable rows=rows /> })
}

#[component]
fn ProductsTable(rows: Vec<Product>) -> impl IntoView {
    let list = ListView::new(rows, Product::default_view());
    let notice = RwSignal::new(None);
    let stats = Signal::derive(move || list.with_all(ProductStats::of));
    let visible = list.visible();

    let delete = move |id: EntityId| {
        let result = list.remove(id);
        notice.set(Some(match result {
            Ok(product) => Notice::success(format!("Removed {}", product.name)),
            Err(err) => Notice::error(err.to_string()),
        }));
    };

    view! {
        <Toast notice=notice />
        <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
            <StatCard title="Products" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="Active"
                value=Signal::derive(move || stats.get().active.to_string())
                tone="text-success"
            />
            <StatCard
                title="Out of stock"
                value=Signal::derive(move || stats.get().out_of_stock.to_string())
                tone="text-error"
            />
            <StatCard
                title="Categories"
                value=Signal::derive(move || stats.get().categories.to_string())
                tone="text-secondary"
            />
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <div class="flex flex-col md:flex-row md:items-end gap-4">
                    <SearchBox
                        value=list.search_term()
                        on_input=Callback::new(move |term| list.set_search(term))
                        placeholder="Search products, sellers, categories"
                    />
                    <FilterSelect
                        label="Category"
                        options=list.filter_options(ProductField::Category)
                        selected=list.filter_option(ProductField::Category)
                        on_change=Callback::new(move |option: String| {
                            list.set_filter(ProductField::Category, &option)
                        })
                    />
                    <FilterSelect
                        label="Status"
                        options=status_options(ProductStatus::ALL.map(|s| s.label()))
                        selected=list.filter_option(ProductField::Status)
                        on_change=Callback::new(move |option: String| list.set_filter(ProductField::Status, &option))
                    />
                </div>

                <div class="overflow-x-auto mt-4">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                {list.header(ProductField::Name)}
                                {list.header(ProductField::Category)}
                                {list.header(ProductField::Price)}
                                {list.header(ProductField::Stock)}
                                {list.header(ProductField::Seller)}
                                {list.header(ProductField::Status)}
                                {list.header(ProductField::Rating)}
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible.get();
                                if rows.is_empty() {
                                    return view! { <EmptyRow colspan=8 message="No products found" /> }.into_any();
                                }
                                rows.into_iter()
                                    .map(|product| {
                                        let id = product.id;
                                        view! {
                                            <tr class="hover">
                                                <td class="font-medium">{product.name}</td>
                                                <td>{product.category}</td>
                                                <td>{format_money(product.price)}</td>
                                                <td>{product.stock}</td>
                                                <td>{product.seller}</td>
                                                <td><StatusBadge label=product.status.label() /></td>
                                                <td>
                                                    <span class="flex items-center gap-1">
                                                        <Star attr:class="h-4 w-4 text-warning" />
                                                        {format!("{:.1}", product.rating)}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-sm text-error"
                                                        title="Delete product"
                                                        on:click=move |_| delete(id)
                                                    >
                                                        <Trash2 attr:class="h-4 w-4" />
                                                    </button>
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
