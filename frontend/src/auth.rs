//! Auth context
//!
//! Holds the reactive mirror of the session. `localStorage` stays the source
//! of truth: each action opens a [`SessionStore`] over it, lets the shared
//! auth action write through the store, then publishes the resulting
//! session to the signal. The router only ever sees the signal.

use crate::api::{BlinkBuyApi, api_config};
use crate::web::LocalStorage;
use blinkbuy_shared::auth::{self, LoginRequest, SignupForm};
use blinkbuy_shared::{AuthResult, Role, Session, SessionStore};
use leptos::prelude::*;

/// Shared through context
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: RwSignal<Session>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::anonymous()),
        }
    }

    /// Injected into the router.
    pub fn session_signal(&self) -> Signal<Session> {
        self.session.into()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.role())
    }

    fn publish(&self, store: &SessionStore<LocalStorage>) {
        self.session.set(store.session().clone());
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// Restores the persisted session; runs once at startup before the router
/// resolves the first route.
pub fn init_auth(ctx: &AuthContext) {
    ctx.publish(&SessionStore::initialize(LocalStorage));
}

/// # Returns
/// The granted role, if the server sent one; navigation to its home page
/// follows from the router's session effect.
pub async fn login(ctx: AuthContext, request: LoginRequest) -> AuthResult<Option<Role>> {
    let api = BlinkBuyApi::new(api_config());
    let mut store = SessionStore::initialize(LocalStorage);
    let role = auth::login(&api, &mut store, &request).await?;
    ctx.publish(&store);
    Ok(role)
}

pub async fn signup(ctx: AuthContext, form: SignupForm) -> AuthResult<Role> {
    let api = BlinkBuyApi::new(api_config());
    let mut store = SessionStore::initialize(LocalStorage);
    let role = auth::signup(&api, &mut store, &form).await?;
    ctx.publish(&store);
    Ok(role)
}

/// Clears the session. The router notices and leaves guarded pages on its own.
pub fn logout(ctx: &AuthContext) {
    let mut store = SessionStore::initialize(LocalStorage);
    auth::logout(&mut store);
    ctx.publish(&store);
}
