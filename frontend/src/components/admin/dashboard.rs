use crate::components::list_view::{StatCard, StatusBadge, format_money, seeded_page, stars};
use crate::web::router::use_router;
use blinkbuy_shared::entity::{Feedback, FeedbackStats, Product, ProductStats, User, UserStats};
use blinkbuy_shared::{AdminPage, AppRoute, fixtures};
use leptos::prelude::*;
use std::collections::BTreeMap;

const RECENT_FEEDBACK: usize = 3;

#[derive(Clone)]
struct Overview {
    products: Vec<Product>,
    users: Vec<User>,
    feedback: Vec<Feedback>,
}

fn overview() -> Overview {
    Overview {
        products: fixtures::admin_products(),
        users: fixtures::users(),
        feedback: fixtures::admin_feedback(),
    }
}

/// Product count and stock value per category, alphabetical.
fn category_summary(products: &[Product]) -> Vec<(String, usize, f64)> {
    let mut by_category: BTreeMap<&str, (usize, f64)> = BTreeMap::new();
    for p in products {
        let entry = by_category.entry(p.category.as_str()).or_default();
        entry.0 += 1;
        entry.1 += p.price * f64::from(p.stock);
    }
    by_category
        .into_iter()
        .map(|(name, (count, value))| (name.to_string(), count, value))
        .collect()
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    seeded_page(overview, |data| view! { <DashboardBody data=data /> })
}

#[component]
fn DashboardBody(data: Overview) -> impl IntoView {
    let router = use_router();
    let products = ProductStats::of(&data.products);
    let users = UserStats::of(&data.users);
    let feedback = FeedbackStats::of(&data.feedback);

    let mut recent = data.feedback.clone();
    recent.sort_by(|a, b| b.date.cmp(&a.date));
    recent.truncate(RECENT_FEEDBACK);

    let categories = category_summary(&data.products)
        .into_iter()
        .map(|(name, count, value)| {
            view! {
                <tr class="hover">
                    <td>{name}</td>
                    <td>{count}</td>
                    <td>{format_money(value)}</td>
                </tr>
            }
        })
        .collect_view();

    let recent = recent
        .into_iter()
        .map(|f| {
            view! {
                <div class="flex items-start justify-between p-3 bg-base-200 rounded-lg gap-4">
                    <div>
                        <p class="font-medium">{f.customer} " on " {f.product}</p>
                        <p class="text-sm text-base-content/70">{f.comment}</p>
                    </div>
                    <div class="text-right shrink-0">
                        <p class="text-warning">{stars(f.rating)}</p>
                        <StatusBadge label=f.status.label() />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            <StatCard
                title="Total Products"
                value=products.total.to_string()
                description="Across all categories"
                tone="text-secondary"
            />
            <StatCard
                title="Total Categories"
                value=products.categories.to_string()
                description="Active categories"
                tone="text-secondary"
            />
            <StatCard
                title="Users"
                value=users.total.to_string()
                description="Total users"
                tone="text-secondary"
            />
        </div>

        <div class="card bg-base-100 shadow-lg">
            <div class="card-body">
                <h2 class="card-title">"Categories Overview"</h2>
                <div class="overflow-x-auto">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th>"Category"</th>
                                <th>"Products"</th>
                                <th>"Stock value"</th>
                            </tr>
                        </thead>
                        <tbody>{categories}</tbody>
                    </table>
                </div>
            </div>
        </div>

        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body space-y-3">
                    <h2 class="card-title">"Recent Feedback"</h2>
                    {recent}
                </div>
            </div>
            <div class="card bg-base-100 shadow-lg">
                <div class="card-body space-y-3">
                    <h2 class="card-title">"Needs attention"</h2>
                    <p>{format!("{} users awaiting approval", users.pending)}</p>
                    <p>{format!("{} feedback entries pending review", feedback.pending)}</p>
                    <p>{format!("{} products out of stock", products.out_of_stock)}</p>
                    <div class="card-actions mt-2">
                        <button
                            class="btn btn-primary btn-sm"
                            on:click=move |_| router.go(AppRoute::Admin(AdminPage::Users))
                        >
                            "Manage users"
                        </button>
                        <button
                            class="btn btn-outline btn-sm"
                            on:click=move |_| router.go(AppRoute::Admin(AdminPage::Feedback))
                        >
                            "Review feedback"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_grouped_alphabetically() {
        let summary = category_summary(&fixtures::admin_products());
        let names: Vec<&str> = summary.iter().map(|(name, _, _)| name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(names, sorted);
        let counted: usize = summary.iter().map(|(_, count, _)| count).sum();
        assert_eq!(counted, fixtures::admin_products().len());
    }
}
