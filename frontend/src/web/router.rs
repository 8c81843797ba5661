//! Router service
//!
//! Wraps the History API of `web_sys`; every touch of `window.history` lives
//! here. A navigation request flows through "parse -> guard -> apply": the
//! path is parsed into an [`AppRoute`], resolved against the injected session
//! signal with [`resolve_navigation`], and the resulting route is pushed to
//! the history stack and the route signal.

use blinkbuy_shared::{AppRoute, Navigation, Session, resolve_navigation};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// Current browser path
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the rejected URL does not stay in history
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// URL to show for a resolved navigation. Unknown paths keep what the user
/// typed instead of jumping to `/404`.
fn display_path<'a>(navigation: Navigation, requested: &'a str) -> &'a str {
    match navigation {
        Navigation::Render(AppRoute::NotFound) => requested,
        other => other.route().to_path(),
    }
}

fn log_redirect(from: AppRoute, navigation: Navigation) {
    if let Navigation::Redirect(to) = navigation {
        log::info!(target: "Router", "{from} is not available, redirecting to {to}");
    }
}

/// Router service
///
/// Drives the UI through the route signal. The session arrives as an
/// injected signal so routing stays decoupled from how auth is stored.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    session: Signal<Session>,
}

impl RouterService {
    fn new(session: Signal<Session>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            session,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **Navigation with guard**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), path, true);
    }

    pub fn go(&self, route: AppRoute) {
        self.navigate(route.to_path());
    }

    /// # Arguments
    /// * `use_push` - `true` pushes a history entry, `false` replaces the current one
    fn navigate_to_route(&self, target: AppRoute, requested_path: &str, use_push: bool) {
        let navigation = self
            .session
            .with_untracked(|session| resolve_navigation(target, session));
        log_redirect(target, navigation);

        let path = display_path(navigation, requested_path);
        if use_push {
            push_history_state(path);
        } else {
            replace_history_state(path);
        }
        self.set_route.set(navigation.route());
    }

    /// Back/forward buttons go through the same guard.
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let session = self.session;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target = AppRoute::from_path(&path);
            let navigation = session.with_untracked(|s| resolve_navigation(target, s));
            log_redirect(target, navigation);
            if navigation.is_redirect() {
                replace_history_state(navigation.route().to_path());
            }
            set_route.set(navigation.route());
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // the listener lives as long as the page
        closure.forget();
    }

    /// Re-runs the guard for the current route on load and on every session
    /// change (login, logout).
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let session = self.session;

        Effect::new(move |previous: Option<()>| {
            let route = current_route.get_untracked();
            let navigation = session.with(|s| resolve_navigation(route, s));
            if let Navigation::Redirect(to) = navigation {
                log_redirect(route, navigation);
                // initial load replaces the entry the user asked for
                if previous.is_none() {
                    replace_history_state(to.to_path());
                } else {
                    push_history_state(to.to_path());
                }
                set_route.set(to);
            }
        });
    }
}

fn provide_router(session: Signal<Session>) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// Components
// ============================================================================

/// Root of the routing tree; provides [`RouterService`] to descendants.
#[component]
pub fn Router(
    /// Session to guard against
    session: Signal<Session>,
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// Renders the view for the current route.
#[component]
pub fn RouterOutlet(
    /// Maps a route to its page
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// In-app link; modified clicks (new tab, new window) fall through to the
/// browser.
#[component]
pub fn Link(
    to: AppRoute,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        router.go(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
