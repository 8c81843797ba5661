use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::web::router::{Link, use_router};
use blinkbuy_shared::auth::LoginRequest;
use blinkbuy_shared::validation::ValidationErrors;
use blinkbuy_shared::{AppRoute, AuthError};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Inline error under an input
#[component]
pub fn FieldHint(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.for_field(field)).map(|message| {
            view! {
                <div class="label">
                    <span class="label-text-alt text-error">{message}</span>
                </div>
            }
        })
    }
}

/// Alert box above a form
#[component]
pub fn FormAlert(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// Maps a failed action onto the form: rule violations go under their
/// inputs, anything else into the alert.
pub fn show_auth_error(
    err: AuthError,
    field_errors: RwSignal<ValidationErrors>,
    alert: RwSignal<Option<String>>,
) {
    log::warn!("auth action failed: {err}");
    alert.set(Some(err.user_message()));
    if let AuthError::Validation(errors) = err {
        field_errors.set(errors);
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_submitting = RwSignal::new(false);
    let alert = RwSignal::new(Option::<String>::None);
    let field_errors = RwSignal::new(ValidationErrors::default());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        is_submitting.set(true);
        alert.set(None);
        field_errors.set(ValidationErrors::default());

        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        spawn_local(async move {
            // a granted role needs no navigation here: the router follows the session
            match login(auth, request).await {
                Ok(Some(_)) => {}
                Ok(None) => router.go(AppRoute::Unauthorized),
                Err(err) => show_auth_error(err, field_errors, alert),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <ShieldCheck attr:class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"BlinkBuy"</h1>
                        <p class="text-base-content/70">"Sign in to manage your marketplace"</p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit novalidate>
                        <FormAlert message=alert />

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="you@blinkbuy.com"
                                on:input=move |ev| email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                            />
                            <FieldHint errors=field_errors field="email" />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                            />
                            <FieldHint errors=field_errors field="password" />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "Sign in".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "New seller? "
                            <Link to=AppRoute::Register class="link link-primary">
                                "Create a store"
                            </Link>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
