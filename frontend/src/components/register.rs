use crate::auth::{signup, use_auth};
use crate::components::login::{FieldHint, FormAlert, show_auth_error};
use crate::web::router::Link;
use blinkbuy_shared::auth::{SignupForm, SignupRequest};
use blinkbuy_shared::validation::{ValidationErrors, validate_signup};
use blinkbuy_shared::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

fn text_field<'a>(request: &'a SignupRequest, field: &str) -> &'a str {
    match field {
        "company_name" => &request.company_name,
        "company_address" => &request.company_address,
        "company_pan_number" => &request.company_pan_number,
        "email" => &request.email,
        "password" => &request.password,
        "confirm_password" => &request.confirm_password,
        "phone_number" => &request.phone_number,
        _ => "",
    }
}

fn text_field_mut<'a>(request: &'a mut SignupRequest, field: &str) -> Option<&'a mut String> {
    match field {
        "company_name" => Some(&mut request.company_name),
        "company_address" => Some(&mut request.company_address),
        "company_pan_number" => Some(&mut request.company_pan_number),
        "email" => Some(&mut request.email),
        "password" => Some(&mut request.password),
        "confirm_password" => Some(&mut request.confirm_password),
        "phone_number" => Some(&mut request.phone_number),
        _ => None,
    }
}

/// Text input bound to one field of the signup request, keyed by the
/// field's wire name (which is also its validation key).
#[component]
fn SignupInput(
    form: RwSignal<SignupForm>,
    errors: RwSignal<ValidationErrors>,
    field: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=field>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=field
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| text_field(&f.request, field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        if let Some(slot) = text_field_mut(&mut f.request, field) {
                            *slot = value;
                        }
                    });
                }
                class="input input-bordered"
            />
            <FieldHint errors=errors field=field />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();

    let form = RwSignal::new(SignupForm::default());
    let is_submitting = RwSignal::new(false);
    let alert = RwSignal::new(Option::<String>::None);
    let field_errors = RwSignal::new(ValidationErrors::default());

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }
        alert.set(None);

        // checked here too so every field lights up before anything is sent
        let submitted = form.get_untracked();
        if let Err(errors) = validate_signup(&submitted) {
            field_errors.set(errors);
            return;
        }
        field_errors.set(ValidationErrors::default());
        is_submitting.set(true);

        spawn_local(async move {
            match signup(auth, submitted).await {
                Ok(role) => log::info!("registered store, signed in as {role}"),
                Err(err) => show_auth_error(err, field_errors, alert),
            }
            is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200 flex items-center justify-center p-4">
            <div class="card w-full max-w-2xl shadow-2xl bg-base-100">
                <form class="card-body" on:submit=on_submit novalidate>
                    <h1 class="text-3xl font-bold text-center">"Open your BlinkBuy store"</h1>
                    <p class="text-center text-base-content/70 mb-4">
                        "Register as a seller to list products and manage orders"
                    </p>
                    <FormAlert message=alert />

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-x-4">
                        <SignupInput
                            form=form
                            errors=field_errors
                            field="company_name"
                            label="Store name"
                            placeholder="TechTrendz"
                        />
                        <SignupInput
                            form=form
                            errors=field_errors
                            field="company_pan_number"
                            label="PAN number"
                        />
                        <div class="md:col-span-2">
                            <SignupInput
                                form=form
                                errors=field_errors
                                field="company_address"
                                label="Company address"
                            />
                        </div>
                        <SignupInput
                            form=form
                            errors=field_errors
                            field="email"
                            label="Email"
                            input_type="email"
                            placeholder="you@store.com"
                        />
                        <SignupInput
                            form=form
                            errors=field_errors
                            field="phone_number"
                            label="Phone number"
                            input_type="tel"
                            placeholder="98XXXXXXXX"
                        />
                        <SignupInput
                            form=form
                            errors=field_errors
                            field="password"
                            label="Password"
                            input_type="password"
                        />
                        <SignupInput
                            form=form
                            errors=field_errors
                            field="confirm_password"
                            label="Confirm password"
                            input_type="password"
                        />
                    </div>

                    <div class="form-control mt-2">
                        <label class="label cursor-pointer justify-start gap-3">
                            <input
                                type="checkbox"
                                class="checkbox checkbox-primary"
                                prop:checked=move || form.with(|f| f.agree_terms)
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    form.update(|f| f.agree_terms = checked);
                                }
                            />
                            <span class="label-text">
                                "I agree to the "
                                <Link to=AppRoute::Terms class="link link-primary">
                                    "terms and conditions"
                                </Link>
                            </span>
                        </label>
                        <FieldHint errors=field_errors field="agree_terms" />
                    </div>

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Creating store..." }.into_any()
                            } else {
                                "Create store".into_any()
                            }}
                        </button>
                    </div>
                    <p class="text-center text-sm mt-2">
                        "Already selling on BlinkBuy? "
                        <Link to=AppRoute::Login class="link link-primary">"Sign in"</Link>
                    </p>
                </form>
            </div>
        </div>
    }
}
