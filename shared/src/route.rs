//! Route tree - domain model
//!
//! Pure routing logic with no DOM dependency: the path table, which subtree
//! each route belongs to, which roles a subtree accepts and how a navigation
//! request resolves against the current session. The browser-facing router
//! service in the frontend only applies the [`Navigation`] produced here.

use crate::guard::{Decision, authorize};
use crate::role::{Role, RoleSet};
use crate::session::Session;
use std::fmt::Display;

/// Pages of the admin subtree (`/admin/*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminPage {
    /// Index page of the subtree
    Dashboard,
    Users,
    Products,
    Feedback,
}

/// Pages of the seller subtree (`/seller/*`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SellerPage {
    /// Index page of the subtree
    Dashboard,
    Products,
    Orders,
    Customers,
    Feedback,
}

/// Guarded subtree sharing one layout shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Admin,
    Seller,
}

impl Section {
    /// Roles accepted by every page of the subtree
    pub const fn required_roles(&self) -> RoleSet {
        match self {
            Section::Admin => RoleSet::ADMIN,
            Section::Seller => RoleSet::SELLER,
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Section::Admin => "Admin",
            Section::Seller => "Seller",
        }
    }

    /// Sidebar entries, index page first.
    pub fn pages(&self) -> &'static [AppRoute] {
        const ADMIN: [AppRoute; 4] = [
            AppRoute::Admin(AdminPage::Dashboard),
            AppRoute::Admin(AdminPage::Users),
            AppRoute::Admin(AdminPage::Products),
            AppRoute::Admin(AdminPage::Feedback),
        ];
        const SELLER: [AppRoute; 5] = [
            AppRoute::Seller(SellerPage::Dashboard),
            AppRoute::Seller(SellerPage::Products),
            AppRoute::Seller(SellerPage::Orders),
            AppRoute::Seller(SellerPage::Customers),
            AppRoute::Seller(SellerPage::Feedback),
        ];
        match self {
            Section::Admin => &ADMIN,
            Section::Seller => &SELLER,
        }
    }
}

/// Application routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// Login page (root route)
    #[default]
    Login,
    /// Seller signup
    Register,
    Admin(AdminPage),
    Seller(SellerPage),
    Unauthorized,
    Terms,
    /// Catch-all
    NotFound,
}

/// Strips query, fragment and trailing slashes; the root stays `/`.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

impl AppRoute {
    /// Parses a URL path into a route; unknown paths become `NotFound`.
    pub fn from_path(path: &str) -> Self {
        match normalize(path) {
            "/" | "/login" => Self::Login,
            "/register" => Self::Register,
            "/admin" | "/admin/dashboard" => Self::Admin(AdminPage::Dashboard),
            "/admin/users" => Self::Admin(AdminPage::Users),
            "/admin/products" => Self::Admin(AdminPage::Products),
            "/admin/feedbacks" => Self::Admin(AdminPage::Feedback),
            "/seller" | "/seller/dashboard" => Self::Seller(SellerPage::Dashboard),
            "/seller/products" => Self::Seller(SellerPage::Products),
            "/seller/orders" => Self::Seller(SellerPage::Orders),
            "/seller/customers" => Self::Seller(SellerPage::Customers),
            "/seller/feedback" => Self::Seller(SellerPage::Feedback),
            "/unauthorized" => Self::Unauthorized,
            "/terms-and-conditions" => Self::Terms,
            _ => Self::NotFound,
        }
    }

    /// Canonical URL path of the route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Register => "/register",
            Self::Admin(AdminPage::Dashboard) => "/admin",
            Self::Admin(AdminPage::Users) => "/admin/users",
            Self::Admin(AdminPage::Products) => "/admin/products",
            Self::Admin(AdminPage::Feedback) => "/admin/feedbacks",
            Self::Seller(SellerPage::Dashboard) => "/seller",
            Self::Seller(SellerPage::Products) => "/seller/products",
            Self::Seller(SellerPage::Orders) => "/seller/orders",
            Self::Seller(SellerPage::Customers) => "/seller/customers",
            Self::Seller(SellerPage::Feedback) => "/seller/feedback",
            Self::Unauthorized => "/unauthorized",
            Self::Terms => "/terms-and-conditions",
            Self::NotFound => "/404",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Seller signup",
            Self::Admin(AdminPage::Dashboard) | Self::Seller(SellerPage::Dashboard) => "Dashboard",
            Self::Admin(AdminPage::Users) => "Users",
            Self::Admin(AdminPage::Products) | Self::Seller(SellerPage::Products) => "Products",
            Self::Admin(AdminPage::Feedback) => "Feedbacks",
            Self::Seller(SellerPage::Orders) => "Orders",
            Self::Seller(SellerPage::Customers) => "Customers",
            Self::Seller(SellerPage::Feedback) => "Customer Feedback",
            Self::Unauthorized => "Unauthorized",
            Self::Terms => "Terms and Conditions",
            Self::NotFound => "Not found",
        }
    }

    /// Guarded subtree the route belongs to, if any.
    pub fn section(&self) -> Option<Section> {
        match self {
            Self::Admin(_) => Some(Section::Admin),
            Self::Seller(_) => Some(Section::Seller),
            _ => None,
        }
    }

    /// **Guard input: roles accepted by this route (`None` means public).**
    pub fn required_roles(&self) -> Option<RoleSet> {
        self.section().map(|s| s.required_roles())
    }

    /// Guarded leaf pages load lazily behind a placeholder.
    pub fn is_lazy(&self) -> bool {
        self.section().is_some()
    }

    /// Public entry pages an authenticated user is moved away from.
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// Landing page after login for `role`.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin(AdminPage::Dashboard),
            Role::Seller => Self::Seller(SellerPage::Dashboard),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// Navigation resolution
// =========================================================

/// What the router should do with a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Show the requested route
    Render(AppRoute),
    /// Show another route instead and replace the URL
    Redirect(AppRoute),
}

impl Navigation {
    /// Route that ends up on screen.
    pub fn route(&self) -> AppRoute {
        match self {
            Navigation::Render(r) | Navigation::Redirect(r) => *r,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Navigation::Redirect(_))
    }
}

/// Applies the route guard to a navigation request.
///
/// Evaluated for every navigation (push, popstate, initial load) and again
/// whenever the session changes.
pub fn resolve_navigation(target: AppRoute, session: &Session) -> Navigation {
    if let Some(required) = target.required_roles() {
        return match authorize(session, required) {
            Decision::Allow => Navigation::Render(target),
            Decision::RedirectToLogin => Navigation::Redirect(AppRoute::Login),
            Decision::RedirectToUnauthorized => Navigation::Redirect(AppRoute::Unauthorized),
        };
    }

    if target.should_redirect_when_authenticated() {
        if let (true, Some(role)) = (session.is_authenticated(), session.role()) {
            return Navigation::Redirect(AppRoute::home_for(role));
        }
    }

    Navigation::Render(target)
}
