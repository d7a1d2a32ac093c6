//! Browser file handles for the avatar and photo inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! `web_sys::File` only exists in the hydrate build. `BrowserFile` hides that
//! behind one type so pages and state compile the same way for SSR, where
//! no file is ever picked.

/// A file chosen in a file input, with an optional object-URL preview.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    pub name: String,
    /// `blob:` URL for thumbnails; empty when no preview was created.
    pub preview_url: String,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

#[cfg(feature = "hydrate")]
impl BrowserFile {
    /// Wrap a file without creating a preview.
    pub fn plain(file: web_sys::File) -> Self {
        Self { name: file.name(), preview_url: String::new(), file }
    }

    /// Wrap a file and create an object URL for its thumbnail.
    pub fn with_preview(file: web_sys::File) -> Self {
        let preview_url = web_sys::Url::create_object_url_with_blob(&file).unwrap_or_else(|err| {
            log::warn!("could not create preview for {}: {err:?}", file.name());
            String::new()
        });
        Self { name: file.name(), preview_url, file }
    }
}

impl BrowserFile {
    /// Revoke the preview URL, if any. Safe to call more than once.
    pub fn release(&self) {
        #[cfg(feature = "hydrate")]
        {
            if !self.preview_url.is_empty() {
                let _ = web_sys::Url::revoke_object_url(&self.preview_url);
            }
        }
    }
}

/// Files currently selected in the `<input type="file">` that fired `ev`.
///
/// Clears the input afterwards so picking the same file again still fires
/// a change event.
#[cfg(feature = "hydrate")]
pub fn take_selected_files(ev: &leptos::ev::Event) -> Vec<web_sys::File> {
    use wasm_bindgen::JsCast;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
        return Vec::new();
    };
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

/// First file selected in the input that fired `ev`, leaving the input as is.
#[cfg(feature = "hydrate")]
pub fn first_selected_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

/// Readable text for a `JsValue` error.
#[cfg(feature = "hydrate")]
pub fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}
