//! Login and seller signup actions
//!
//! The network call sits behind [`AuthGateway`] so the actions can run against
//! the browser HTTP client in the app and an in-memory double in tests. Both
//! actions are the only writers of the session: they validate the form, call
//! the gateway, and commit the returned token to the [`SessionStore`]. Any
//! failure returns before the store is touched.

use crate::error::{AuthError, AuthResult};
use crate::role::Role;
use crate::session::{SessionStorage, SessionStore};
use crate::validation::{validate_login, validate_signup};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

// =========================================================
// Wire types
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the seller registration endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub company_name: String,
    pub company_address: String,
    pub company_pan_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone_number: String,
}

/// Signup page state: the request plus the terms checkbox, which is never sent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub request: SignupRequest,
    pub agree_terms: bool,
}

/// Success body of both endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    #[serde(default)]
    pub role: Option<String>,
}

// =========================================================
// Gateway
// =========================================================

#[async_trait(?Send)]
pub trait AuthGateway {
    async fn login(&self, request: &LoginRequest) -> AuthResult<TokenResponse>;
    async fn signup(&self, request: &SignupRequest) -> AuthResult<TokenResponse>;
}

// =========================================================
// Actions
// =========================================================

/// Signs in and starts a session. Returns the granted role so the caller can
/// route to its home page, or `None` when the server sent only a token.
///
/// # Errors
/// Validation failures, gateway errors, a role the app does not know, a blank
/// token, and a failed storage write. The store is unchanged in every case.
pub async fn login<G, S>(
    gateway: &G,
    store: &mut SessionStore<S>,
    request: &LoginRequest,
) -> AuthResult<Option<Role>>
where
    G: AuthGateway + ?Sized,
    S: SessionStorage,
{
    validate_login(request)?;
    let response = gateway.login(request).await?;
    match response.role.as_deref() {
        Some(raw) => {
            let role = parse_role(raw)?;
            store.set_session(response.token, role)?;
            Ok(Some(role))
        }
        None => {
            store.set_token(response.token)?;
            Ok(None)
        }
    }
}

/// Registers a seller account and starts its session. A response without a
/// role is treated as a seller.
///
/// # Errors
/// Same as [`login`].
pub async fn signup<G, S>(
    gateway: &G,
    store: &mut SessionStore<S>,
    form: &SignupForm,
) -> AuthResult<Role>
where
    G: AuthGateway + ?Sized,
    S: SessionStorage,
{
    validate_signup(form)?;
    let response = gateway.signup(&form.request).await?;
    let role = match response.role.as_deref() {
        Some(raw) => parse_role(raw)?,
        None => Role::Seller,
    };
    store.set_session(response.token, role)?;
    Ok(role)
}

/// Ends the session. Safe to call when already signed out.
pub fn logout<S: SessionStorage>(store: &mut SessionStore<S>) {
    store.clear_session();
}

fn parse_role(raw: &str) -> AuthResult<Role> {
    raw.parse::<Role>()
        .map_err(|err| AuthError::InvalidResponse(err.to_string()))
}
