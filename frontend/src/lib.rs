//! BlinkBuy console frontend
//!
//! Layering follows the data flow:
//! - `web`: browser wrappers (history router, `localStorage`)
//! - `auth`: session context fed by the shared auth actions
//! - `api`: HTTP implementation of the auth gateway
//! - `components`: pages and widgets
//!
//! Routing decisions themselves live in `blinkbuy_shared::route`; the router
//! here only applies them to the address bar.

mod api;
mod auth;
mod components {
    pub mod admin;
    mod icons;
    pub mod layout;
    pub(crate) mod list_view;
    pub mod login;
    pub mod pages;
    pub mod register;
    pub mod seller;
}
pub mod web;

use crate::auth::{AuthContext, init_auth};
use crate::components::admin::{AdminDashboard, FeedbackPage, ProductsPage, UsersPage};
use crate::components::layout::SectionLayout;
use crate::components::list_view::PageLoader;
use crate::components::login::LoginPage;
use crate::components::pages::{NotFoundPage, TermsPage, UnauthorizedPage};
use crate::components::register::RegisterPage;
use crate::components::seller::{
    CustomerFeedbackPage, CustomersPage, OrdersPage, SellerDashboard, SellerProductsPage,
};
use crate::web::router::{Router, RouterOutlet};
use blinkbuy_shared::{AdminPage, AppRoute, SellerPage};
use leptos::prelude::*;

fn admin_page(page: AdminPage) -> AnyView {
    match page {
        AdminPage::Dashboard => view! { <AdminDashboard /> }.into_any(),
        AdminPage::Users => view! { <UsersPage /> }.into_any(),
        AdminPage::Products => view! { <ProductsPage /> }.into_any(),
        AdminPage::Feedback => view! { <FeedbackPage /> }.into_any(),
    }
}

fn seller_page(page: SellerPage) -> AnyView {
    match page {
        SellerPage::Dashboard => view! { <SellerDashboard /> }.into_any(),
        SellerPage::Products => view! { <SellerProductsPage /> }.into_any(),
        SellerPage::Orders => view! { <OrdersPage /> }.into_any(),
        SellerPage::Customers => view! { <CustomersPage /> }.into_any(),
        SellerPage::Feedback => view! { <CustomerFeedbackPage /> }.into_any(),
    }
}

fn page_view(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Admin(page) => admin_page(page),
        AppRoute::Seller(page) => seller_page(page),
        AppRoute::Unauthorized => view! { <UnauthorizedPage /> }.into_any(),
        AppRoute::Terms => view! { <TermsPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// Lazy pages load their rows behind a loader. The boundary is rebuilt on
/// every navigation, so leaving a page drops whatever it was still loading.
fn routed_page(route: AppRoute) -> AnyView {
    if route.is_lazy() {
        view! {
            <Suspense fallback=|| view! { <PageLoader /> }>{page_view(route)}</Suspense>
        }
        .into_any()
    } else {
        page_view(route)
    }
}

/// Maps the resolved route to its page. Guarded pages render inside their
/// section's layout; the guard has already run by the time this is called.
fn route_matcher(route: AppRoute) -> AnyView {
    match route.section() {
        Some(section) => view! {
            <SectionLayout section=section>{routed_page(route)}</SectionLayout>
        }
        .into_any(),
        None => routed_page(route),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // restore before the router resolves the first URL
    init_auth(&auth_ctx);

    view! {
        <Router session=auth_ctx.session_signal()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
