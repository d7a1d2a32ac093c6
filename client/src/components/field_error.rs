//! Inline validation message under a form input.

use forms::{Field, FieldErrors};
use leptos::prelude::*;

#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field).map(str::to_owned));

    view! {
        <Show when=move || message().is_some()>
            <p class="field-error" data-field=field.wire_name()>
                {move || message().unwrap_or_default()}
            </p>
        </Show>
    }
}
