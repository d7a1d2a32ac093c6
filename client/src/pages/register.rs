//! Registration page with avatar and multi-photo upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! Picked photos are filtered by image type as they are chosen and kept in a
//! local [`PhotoSelection`]. The selection holds browser `File` handles, which
//! are not `Send`, so it lives in a local-storage signal; the view only ever
//! sees [`PhotoThumb`] projections.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use forms::{Field, FieldErrors, RegistrationForm};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::field_error::FieldError;
use crate::components::navbar::Navbar;
use crate::components::photo_grid::{PhotoGrid, PhotoThumb, thumbs_of};
use crate::pages::{LOGIN_ROUTE, SubmitGate};
use crate::state::photos::PhotoSelection;
use crate::state::toast::ToastState;
use crate::util::files::BrowserFile;

fn prepare_submit(busy: bool, form: RegistrationForm, photo_count: usize) -> SubmitGate<RegistrationForm> {
    if busy {
        return SubmitGate::Busy;
    }
    let errors = form.validate(photo_count);
    if errors.is_empty() { SubmitGate::Ready(form) } else { SubmitGate::Invalid(errors) }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let avatar = RwSignal::new_local(None::<BrowserFile>);
    let photos = RwSignal::new_local(PhotoSelection::<BrowserFile>::default());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    on_cleanup(move || {
        if let Some(entries) = photos.try_update_untracked(PhotoSelection::take_all) {
            for entry in entries {
                entry.file.release();
            }
        }
    });

    let thumbs: Signal<Vec<PhotoThumb>> = Signal::derive(move || photos.with(thumbs_of));

    let on_remove = Callback::new(move |id: u64| {
        if let Some(Some(entry)) = photos.try_update(|sel| sel.remove(id)) {
            entry.file.release();
        }
    });

    let on_photos = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            for file in crate::util::files::take_selected_files(&ev) {
                let (name, mime) = (file.name(), file.type_());
                let outcome = photos.try_update(|sel| sel.offer(&name, &mime, || BrowserFile::with_preview(file)));
                if let Some(Err(rejected)) = outcome {
                    log::debug!("skipped {} ({})", rejected.name, rejected.mime);
                    notify(toasts, ToastKind::Warning, forms::INVALID_IMAGE_MESSAGE);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_avatar = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        avatar.set(crate::util::files::first_selected_file(&ev).map(BrowserFile::plain));
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
        };
        let photo_count = photos.with_untracked(PhotoSelection::len);
        let form = match prepare_submit(busy.get_untracked(), form, photo_count) {
            SubmitGate::Ready(form) => form,
            SubmitGate::Invalid(found) => {
                errors.set(found);
                return;
            }
            SubmitGate::Busy => return,
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let avatar_file = avatar.get_untracked();
        let photo_files: Vec<BrowserFile> =
            photos.with_untracked(|sel| sel.entries().iter().map(|entry| entry.file.clone()).collect());

        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::notify;
            use crate::state::toast::ToastKind;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&form, avatar_file.as_ref(), &photo_files).await {
                    Ok(msg) => {
                        if let Some(msg) = msg {
                            notify(toasts, ToastKind::Success, msg);
                        }
                        navigate(crate::pages::SUCCESS_ROUTE, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        notify(toasts, ToastKind::Error, e.to_string());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, avatar_file, photo_files, toasts);
    };

    view! {
        <Navbar />
        <section class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create an Account"</h1>
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
                        <label for="firstName" class="auth-label">
                            "Your First Name"
                        </label>
                        <input
                            id="firstName"
                            name="firstName"
                            class="auth-input"
                            placeholder="First Name"
                            prop:value=move || first_name.get()
                            on:input=move |ev| first_name.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::FirstName />
                    </div>
                    <div class="auth-field">
                        <label for="lastName" class="auth-label">
                            "Your Last Name"
                        </label>
                        <input
                            id="lastName"
                            name="lastName"
                            class="auth-input"
                            placeholder="Last Name"
                            prop:value=move || last_name.get()
                            on:input=move |ev| last_name.set(event_target_value(&ev))
                        />
                        <FieldError errors=errors field=Field::LastName />
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
                    <div class="auth-field">
                        <label for="avatar" class="auth-label">
                            "Avatar"
                        </label>
                        <input
                            id="avatar"
                            name="avatar"
                            type="file"
                            accept="image/*"
                            class="auth-input"
                            on:change=on_avatar
                        />
                    </div>
                    <div class="auth-field">
                        <label for="photos" class="auth-label">
                            "Photos"
                        </label>
                        <input
                            id="photos"
                            type="file"
                            multiple=true
                            accept="image/gif,image/jpeg,image/png"
                            class="auth-input"
                            on:change=on_photos
                        />
                        <FieldError errors=errors field=Field::Photos />
                        <PhotoGrid thumbs=thumbs on_remove=on_remove />
                    </div>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                    <p class="auth-switch">
                        "Already have an account "
                        <A href=LOGIN_ROUTE attr:class="auth-switch__link">
                            "Sign In"
                        </A>
                    </p>
                </form>
            </div>
        </section>
    }
}
