//! Public pages outside the guarded sections

use crate::auth::use_auth;
use crate::web::router::{Link, use_router};
use blinkbuy_shared::AppRoute;
use leptos::prelude::*;

/// Centered message with a single way out
#[component]
fn MessagePage(code: &'static str, title: &'static str, message: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <p class="text-6xl font-black text-primary">{code}</p>
                    <h1 class="text-3xl font-bold">{title}</h1>
                    <p class="text-base-content/70">{message}</p>
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Shown when the session's role does not match the section.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    // back to where the current role belongs, or to login
    let home = move || auth.role().map(AppRoute::home_for).unwrap_or(AppRoute::Login);

    view! {
        <MessagePage
            code="403"
            title="Access denied"
            message="Your account does not have permission to view this page."
        >
            <button class="btn btn-primary" on:click=move |_| router.go(home())>
                "Go to my dashboard"
            </button>
        </MessagePage>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <MessagePage code="404" title="Page not found" message="The page you are looking for does not exist.">
            <Link to=AppRoute::Login class="btn btn-primary">"Back to start"</Link>
        </MessagePage>
    }
}

const TERMS: &[(&str, &str)] = &[
    (
        "Seller accounts",
        "Sellers must provide accurate company details, including a valid PAN number and contact phone. \
         BlinkBuy may suspend stores whose details cannot be verified.",
    ),
    (
        "Listings",
        "Products must be described truthfully. Prices, stock levels and discounts shown to customers \
         are the seller's responsibility and must be kept current.",
    ),
    (
        "Orders and shipping",
        "Sellers ship accepted orders to the address supplied by the customer and keep order statuses up to date.",
    ),
    (
        "Customer feedback",
        "Feedback may be moderated by BlinkBuy administrators. Sellers may reply to feedback but may not remove it.",
    ),
    (
        "Fees and payouts",
        "Marketplace fees are deducted from each completed order before payout to the seller.",
    ),
];

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200 py-10 px-4">
            <article class="card max-w-3xl mx-auto bg-base-100 shadow-xl">
                <div class="card-body prose">
                    <h1>"Terms and Conditions"</h1>
                    {TERMS
                        .iter()
                        .enumerate()
                        .map(|(i, (heading, body))| {
                            view! {
                                <section>
                                    <h2 class="text-lg font-semibold">{format!("{}. {heading}", i + 1)}</h2>
                                    <p>{*body}</p>
                                </section>
                            }
                        })
                        .collect_view()}
                    <div class="card-actions justify-end mt-4">
                        <Link to=AppRoute::Register class="btn btn-primary">"Back to signup"</Link>
                    </div>
                </div>
            </article>
        </div>
    }
}
