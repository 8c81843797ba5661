use crate::components::icons::{Package, ShoppingBag, UsersIcon};
use crate::components::list_view::{StatCard, StatusBadge, format_money, format_rating, seeded_page};
use crate::web::router::use_router;
use blinkbuy_shared::entity::{Feedback, FeedbackStats, Order, OrderStats, Product, ProductStats};
use blinkbuy_shared::{AppRoute, SellerPage, fixtures};
use leptos::prelude::*;

const RECENT_ORDERS: usize = 3;
const TOP_PRODUCTS: usize = 3;

#[derive(Clone)]
struct StoreSnapshot {
    products: Vec<Product>,
    orders: Vec<Order>,
    feedback: Vec<Feedback>,
}

fn snapshot() -> StoreSnapshot {
    StoreSnapshot {
        products: fixtures::seller_products(),
        orders: fixtures::orders(),
        feedback: fixtures::customer_feedback(),
    }
}

/// Best rated first; ties keep catalogue order.
fn top_rated(products: &[Product], n: usize) -> Vec<&Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    ranked.truncate(n);
    ranked
}

#[component]
pub fn SellerDashboard() -> impl IntoView {
    seeded_page(snapshot, |data| view! { <DashboardBody data=data /> })
}

#[component]
fn DashboardBody(data: StoreSnapshot) -> impl IntoView {
    let router = use_router();
    let orders = OrderStats::of(&data.orders);
    let products = ProductStats::of(&data.products);
    let feedback = FeedbackStats::of(&data.feedback);

    let mut recent = data.orders.clone();
    recent.sort_by(|a, b| b.order_date.cmp(&a.order_date));
    recent.truncate(RECENT_ORDERS);
    let recent = recent
        .into_iter()
        .map(|o| {
            view! {
                <tr class="hover">
                    <td>{format!("#{}", o.id)}</td>
                    <td>{o.customer.clone()}</td>
                    <td>{format_money(o.total)}</td>
                    <td><StatusBadge label=o.status.label() /></td>
                </tr>
            }
        })
        .collect_view();

    let top = top_rated(&data.products, TOP_PRODUCTS)
        .into_iter()
        .map(|p| {
            view! {
                <div class="flex items-center justify-between p-3 bg-base-200 rounded-lg">
                    <div>
                        <p class="font-medium">{p.name.clone()}</p>
                        <p class="text-sm text-base-content/70">{format_money(p.price)}</p>
                    </div>
                    <p class="font-semibold text-warning">{format_rating(p.rating)}</p>
                </div>
            }
        })
        .collect_view();

    let quick = move |route: SellerPage, label: &'static str, icon: AnyView| {
        view! {
            <button class="btn btn-outline gap-2" on:click=move |_| router.go(AppRoute::Seller(route))>
                {icon}
                {label}
            </button>
        }
    };

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            <StatCard title="Total Sales" value=format_money(orders.revenue) tone="text-success" />
            <StatCard title="Total Orders" value=orders.total.to_string() />
            <StatCard title="Products" value=products.total.to_string() tone="text-secondary" />
            <StatCard title="Pending Orders" value=orders.pending.to_string() tone="text-warning" />
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body">
                    <h2 class="card-title">"Recent Orders"</h2>
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Order"</th>
                                <th>"Customer"</th>
                                <th>"Total"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>{recent}</tbody>
                    </table>
                </div>
            </div>
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body space-y-3">
                    <h2 class="card-title">"Top Products"</h2>
                    {top}
                </div>
            </div>
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <h2 class="card-title">"Performance Metrics"</h2>
                <div class="stats stats-vertical md:stats-horizontal">
                    <div class="stat">
                        <div class="stat-title">"Average rating"</div>
                        <div class="stat-value text-lg">{format_rating(feedback.average_rating)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Response rate"</div>
                        <div class="stat-value text-lg">{format!("{:.0}%", feedback.response_rate)}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-title">"Out of stock"</div>
                        <div class="stat-value text-lg">{products.out_of_stock}</div>
                    </div>
                </div>
                <h2 class="card-title mt-4">"Quick Actions"</h2>
                <div class="flex flex-wrap gap-3">
                    {quick(SellerPage::Products, "Manage products", view! { <Package attr:class="h-4 w-4" /> }.into_any())}
                    {quick(SellerPage::Orders, "View orders", view! { <ShoppingBag attr:class="h-4 w-4" /> }.into_any())}
                    {quick(SellerPage::Customers, "Customers", view! { <UsersIcon attr:class="h-4 w-4" /> }.into_any())}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_rated_orders_by_rating() {
        let products = fixtures::seller_products();
        let names: Vec<&str> = top_rated(&products, 3).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Coffee Maker", "Smartphone X", "Running Shoes"]);
    }
}
