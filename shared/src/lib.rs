//! Domain core of the BlinkBuy admin console
//!
//! Everything here is target-independent and runs on the native test target:
//! the session store and route guard, the route table, the list-view
//! filter/sort engine with its entities and seed data, and the auth actions
//! behind a gateway trait. The browser crate supplies storage, HTTP and
//! rendering.

pub mod auth;
pub mod config;
pub mod date;
pub mod entity;
pub mod error;
pub mod fixtures;
pub mod guard;
pub mod list;
pub mod role;
pub mod route;
pub mod session;
pub mod validation;

pub use auth::{AuthGateway, LoginRequest, SignupForm, SignupRequest, TokenResponse};
pub use config::ApiConfig;
pub use date::CalendarDate;
pub use error::{AuthError, AuthResult, ConfigurationError, ListError, SessionError};
pub use guard::{Decision, authorize};
pub use role::{Role, RoleSet};
pub use route::{AdminPage, AppRoute, Navigation, Section, SellerPage, resolve_navigation};
pub use session::{MemoryStorage, Session, SessionStorage, SessionStore};
