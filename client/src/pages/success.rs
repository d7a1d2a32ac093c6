//! Post-registration landing page.
//!
//! The "Login" action drops any `token` cookie left from registration before
//! sending the user to the login form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::pages::LOGIN_ROUTE;
use crate::util::cookie::{self, AUTH_COOKIE};

#[component]
pub fn SuccessPage() -> impl IntoView {
    let navigate = use_navigate();

    let on_login = move |_| {
        cookie::remove(AUTH_COOKIE);
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <div class="success-page">
            <p class="success-page__title">"Welcome to Success Page"</p>
            <button class="success-page__button" on:click=on_login>
                "Login"
            </button>
        </div>
    }
}
