//! Browser cookie removal.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Name of the authentication cookie issued by the API.
pub const AUTH_COOKIE: &str = "token";

/// `document.cookie` assignment that expires `name` on the root path.
#[must_use]
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/")
}

/// Delete cookie `name` from the current document. No-op outside the browser.
pub fn remove(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(html) = document.dyn_into::<web_sys::HtmlDocument>() else {
            return;
        };
        if let Err(err) = html.set_cookie(&expired_cookie(name)) {
            log::warn!("failed to clear cookie {name}: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}
