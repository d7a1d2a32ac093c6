//! Thumbnail grid for selected registration photos.

#[cfg(test)]
#[path = "photo_grid_test.rs"]
mod photo_grid_test;

use leptos::prelude::*;

use crate::state::photos::PhotoSelection;
use crate::util::files::BrowserFile;

/// Render-only projection of a selected photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhotoThumb {
    pub id: u64,
    pub name: String,
    pub preview_url: String,
}

/// Thumbnails for every entry, in selection order.
pub fn thumbs_of(selection: &PhotoSelection<BrowserFile>) -> Vec<PhotoThumb> {
    selection
        .entries()
        .iter()
        .map(|entry| PhotoThumb {
            id: entry.id,
            name: entry.name.clone(),
            preview_url: entry.file.preview_url.clone(),
        })
        .collect()
}

#[component]
pub fn PhotoGrid(thumbs: Signal<Vec<PhotoThumb>>, on_remove: Callback<u64>) -> impl IntoView {
    view! {
        <div class="photo-grid">
            <For
                each=move || thumbs.get()
                key=|thumb| thumb.id
                children=move |thumb: PhotoThumb| {
                    let id = thumb.id;
                    view! {
                        <div class="photo-grid__item">
                            <span
                                class="photo-grid__remove"
                                title="Remove"
                                on:click=move |_| on_remove.run(id)
                            >
                                "×"
                            </span>
                            <img class="photo-grid__image" src=thumb.preview_url alt=thumb.name />
                        </div>
                    }
                }
            />
        </div>
    }
}
