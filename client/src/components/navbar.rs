//! Top navigation bar shared by the form pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::pages::{LOGIN_ROUTE, REGISTER_ROUTE};

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <A href=LOGIN_ROUTE attr:class="navbar__brand">
                "Portal"
            </A>
            <div class="navbar__links">
                <A href=LOGIN_ROUTE attr:class="navbar__link">
                    "Sign In"
                </A>
                <A href=REGISTER_ROUTE attr:class="navbar__link">
                    "Sign Up"
                </A>
            </div>
        </nav>
    }
}
