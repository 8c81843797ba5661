use super::product_dialog::{ProductDialog, ProductEdit};
use crate::components::icons::{Package, Pencil, Plus, Star, Trash2};
use crate::components::list_view::{
    FilterSelect, ListView, Notice, SearchBox, SortSelect, StatCard, StatusBadge, Toast, format_money,
    seeded_page,
};
use blinkbuy_shared::entity::{DefaultView, Product, ProductDraft, ProductField, ProductStats};
use blinkbuy_shared::fixtures::{self, DEMO_STORE};
use blinkbuy_shared::list::{ALL_SENTINEL, EntityId};
use leptos::prelude::*;

const SORT_OPTIONS: &[(&str, &str)] = &[
    ("name-asc", "Name: A-Z"),
    ("name-desc", "Name: Z-A"),
    ("price-desc", "Price: High to Low"),
    ("price-asc", "Price: Low to High"),
    ("stock-desc", "Stock: High to Low"),
    ("stock-asc", "Stock: Low to High"),
];

#[component]
pub fn SellerProductsPage() -> impl IntoView {
    seeded_page(fixtures::seller_products, |rows| view! { <ProductGrid rows=rows /> })
}

#[component]
fn ProductGrid(rows: Vec<Product>) -> impl IntoView {
    let list = ListView::new(rows, Product::default_view());
    let notice = RwSignal::new(None);
    let editing = RwSignal::new(None::<ProductEdit>);
    let stats = Signal::derive(move || list.with_all(ProductStats::of));
    let visible = list.visible();

    let categories = list.filter_options(ProductField::Category);
    let dialog_categories =
        Signal::derive(move || categories.get().into_iter().filter(|c| c != ALL_SENTINEL).collect::<Vec<_>>());

    let save = move |(target, draft): (Option<EntityId>, ProductDraft)| {
        let message = match target {
            Some(id) => list
                .update(id, |p| p.apply_draft(&draft))
                .map(|()| Notice::success(format!("Updated {}", draft.name.trim())))
                .unwrap_or_else(|err| Notice::error(err.to_string())),
            None => {
                let name = draft.name.trim().to_string();
                match list.create(|id| draft.into_product(id, DEMO_STORE)) {
                    Some(Ok(_)) => Notice::success(format!("Added {name}")),
                    Some(Err(err)) => Notice::error(err.to_string()),
                    None => Notice::error("Product list is no longer available"),
                }
            }
        };
        notice.set(Some(message));
    };

    let edit = move |id: EntityId| match list.get(id) {
        Some(product) => editing.set(Some(ProductEdit::edit(id, ProductDraft::from_product(&product)))),
        None => log::warn!("edit requested for missing product {id}"),
    };
    let delete = move |id: EntityId| {
        let result = list.remove(id);
        notice.set(Some(match result {
            Ok(product) => Notice::success(format!("Deleted {}", product.name)),
            Err(err) => Notice::error(err.to_string()),
        }));
    };

    view! {
        <Toast notice=notice />
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard title="Total Products" value=Signal::derive(move || stats.get().total.to_string()) />
            <StatCard
                title="In stock"
                value=Signal::derive(move || (stats.get().total - stats.get().out_of_stock).to_string())
                tone="text-success"
            />
            <StatCard
                title="Out of stock"
                value=Signal::derive(move || stats.get().out_of_stock.to_string())
                tone="text-error"
            />
        </div>

        <div class="flex flex-col md:flex-row md:items-end gap-4">
            <SearchBox
                value=list.search_term()
                on_input=Callback::new(move |term| list.set_search(term))
                placeholder="Search products"
            />
            <FilterSelect
                label="Category"
                options=categories
                selected=list.filter_option(ProductField::Category)
                on_change=Callback::new(move |option: String| list.set_filter(ProductField::Category, &option))
            />
            <SortSelect
                options=SORT_OPTIONS
                selected=list.sort_key()
                on_change=Callback::new(move |key: String| list.apply_sort_key(&key))
            />
            <button
                class="btn btn-primary gap-2 md:ml-auto"
                on:click=move |_| editing.set(Some(ProductEdit::create()))
            >
                <Plus attr:class="h-4 w-4" />
                "Add Product"
            </button>
        </div>

        <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6">
            {move || {
                let rows = visible.get();
                if rows.is_empty() {
                    return view! {
                        <div class="col-span-full text-center py-12 text-base-content/50">
                            <Package attr:class="h-10 w-10 mx-auto mb-2" />
                            "No products found"
                        </div>
                    }
                    .into_any();
                }
                rows.into_iter()
                    .map(|product| {
                        let id = product.id;
                        let discount = product.discount_percent();
                        view! {
                            <div class="card bg-base-100 shadow-lg">
                                <div class="card-body">
                                    <div class="flex items-start justify-between gap-2">
                                        <h2 class="card-title">{product.name.clone()}</h2>
                                        <StatusBadge label=product.status.label() />
                                    </div>
                                    <p class="text-sm text-base-content/70">{product.category.clone()}</p>
                                    <div class="flex items-baseline gap-2">
                                        <span class="text-xl font-bold">{format_money(product.price)}</span>
                                        {discount.map(|pct| view! {
                                            <span class="line-through text-sm text-base-content/50">
                                                {format_money(product.original_price)}
                                            </span>
                                            <span class="badge badge-secondary badge-sm">{format!("-{pct}%")}</span>
                                        })}
                                    </div>
                                    <div class="flex justify-between text-sm">
                                        <span>{format!("Stock: {}", product.stock)}</span>
                                        <span class="flex items-center gap-1">
                                            <Star attr:class="h-4 w-4 text-warning" />
                                            {format!("{:.1}", product.rating)}
                                        </span>
                                    </div>
                                    <div class="card-actions justify-end mt-2">
                                        <button class="btn btn-sm btn-ghost gap-1" on:click=move |_| edit(id)>
                                            <Pencil attr:class="h-4 w-4" />
                                            "Edit"
                                        </button>
                                        <button class="btn btn-sm btn-ghost text-error gap-1" on:click=move |_| delete(id)>
                                            <Trash2 attr:class="h-4 w-4" />
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>

        <ProductDialog editing=editing categories=dialog_categories on_save=Callback::new(save) />
    }
}
