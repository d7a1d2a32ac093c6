//! Remote API base URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host renders the configured URL into a `<meta>` tag in the SSR shell;
//! the hydrated client reads it back from the document. Builds that run
//! without a document fall back to `PORTAL_API_URL` at compile time and then
//! to [`DEFAULT_API_URL`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `name` of the `<meta>` tag carrying the API base URL.
pub const API_URL_META: &str = "portal-api-url";

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Base URL of the remote API, without a trailing slash.
pub fn api_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        if let Some(url) = read_meta_api_url() {
            return normalize_base(&url);
        }
    }
    normalize_base(option_env!("PORTAL_API_URL").unwrap_or(DEFAULT_API_URL))
}

#[cfg(feature = "hydrate")]
fn read_meta_api_url() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{API_URL_META}\"]");
    let meta = document.query_selector(&selector).ok().flatten()?;
    meta.get_attribute("content").filter(|url| !url.trim().is_empty())
}

/// Trim whitespace and trailing slashes from a base URL.
#[must_use]
pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_owned()
}

/// Join `base` and an absolute API `path` with exactly one slash.
#[must_use]
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}
