//! Login page: email + password form posting to the user API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use forms::{Field, FieldErrors, LoginForm};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::field_error::FieldError;
use crate::components::navbar::Navbar;
use crate::pages::{REGISTER_ROUTE, SubmitGate};
use crate::state::toast::ToastState;

fn prepare_submit(busy: bool, form: LoginForm) -> SubmitGate<LoginForm> {
    if busy {
        return SubmitGate::Busy;
    }
    let errors = form.validate();
    if errors.is_empty() { SubmitGate::Ready(form) } else { SubmitGate::Invalid(errors) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = LoginForm { email: email.get_untracked(), password: password.get_untracked() };
        let form = match prepare_submit(busy.get_untracked(), form) {
            SubmitGate::Ready(form) => form,
            SubmitGate::Invalid(found) => {
                errors.set(found);
                return;
            }
            SubmitGate::Busy => return,
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            match crate::net::api::login(&form).await {
                Ok(msg) => {
                    // The profile page is a full load, so a toast here would never render.
                    if let Some(msg) = msg {
                        log::info!("login: {msg}");
                    }
                    crate::util::navigate_external(crate::pages::PROFILE_ROUTE);
                }
                Err(e) => {
                    notify(toasts, ToastKind::Error, e.to_string());
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, toasts);
    };

    view! {
        <Navbar />
        <section class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Log In"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-field">
                        <label for="email" class="auth-label">
                            "Your Email"
                        </label>
                        <input
                            id="email"
                            name="email"
                            class="auth-input"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Email />
                    </div>
                    <div class="auth-field">
                        <label for="password" class="auth-label">
                            "Password"
                        </label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            class="auth-input"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::Password />
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                    <p class="auth-switch">
                        "You have no account "
                        <A href=REGISTER_ROUTE attr:class="auth-switch__link">
                            "Sign Up"
                        </A>
                    </p>
                </form>
            </div>
        </section>
    }
}
