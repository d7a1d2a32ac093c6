//! REST calls to the remote user API.
//!
//! Client-side (hydrate): real multipart POSTs via `gloo-net` + `FormData`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since form
//! submission only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every outcome is a `Result<Option<String>, ApiError>`: `Ok` carries the
//! success `msg` (if any) and `Err` carries the text to toast. The multipart
//! `Content-Type` is left to the browser so the boundary is filled in.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use forms::{ApiError, LoginForm, RegistrationForm};

use crate::util::files::BrowserFile;

pub const LOGIN_PATH: &str = "/users/login";
pub const REGISTER_PATH: &str = "/users/register";

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint(base: &str) -> String {
    crate::util::config::endpoint(base, LOGIN_PATH)
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint(base: &str) -> String {
    crate::util::config::endpoint(base, REGISTER_PATH)
}

/// Sign in via `POST {API_URL}/users/login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the derived message on a non-success
/// status, or a transport/build error if no response was received.
pub async fn login(form: &LoginForm) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart(&form.text_parts())?;
        post_multipart(login_endpoint(&crate::util::config::api_url()), body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = form;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST {API_URL}/users/register`.
///
/// Text fields are sent first, then `avatar` (when chosen) and one `photos`
/// part per selected image, in selection order.
///
/// # Errors
///
/// Same as [`login`].
pub async fn register(
    form: &RegistrationForm,
    avatar: Option<&BrowserFile>,
    photos: &[BrowserFile],
) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart(&form.text_parts())?;
        if let Some(avatar) = avatar {
            append_file(&body, forms::AVATAR_PART, avatar)?;
        }
        for photo in photos {
            append_file(&body, forms::Field::Photos.wire_name(), photo)?;
        }
        post_multipart(register_endpoint(&crate::util::config::api_url()), body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, avatar, photos);
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn multipart(parts: &[(&str, &str)]) -> Result<web_sys::FormData, ApiError> {
    use crate::util::files::js_error_text;

    let data = web_sys::FormData::new().map_err(|e| ApiError::Request(js_error_text(&e)))?;
    for (key, value) in parts {
        data.append_with_str(key, value)
            .map_err(|e| ApiError::Request(js_error_text(&e)))?;
    }
    Ok(data)
}

#[cfg(feature = "hydrate")]
fn append_file(data: &web_sys::FormData, key: &str, file: &BrowserFile) -> Result<(), ApiError> {
    data.append_with_blob_and_filename(key, &file.file, &file.name)
        .map_err(|e| ApiError::Request(crate::util::files::js_error_text(&e)))
}

#[cfg(feature = "hydrate")]
async fn post_multipart(url: String, body: web_sys::FormData) -> Result<Option<String>, ApiError> {
    let resp = gloo_net::http::Request::post(&url)
        .body(body)
        .map_err(|e| ApiError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| {
            log::warn!("POST {url} failed: {e}");
            ApiError::Network(e.to_string())
        })?;

    let status = resp.status();
    let ok = resp.ok();
    let text = resp.text().await.unwrap_or_default();
    if ok {
        Ok(forms::success_message(&text))
    } else {
        log::info!("POST {url} rejected with status {status}");
        Err(ApiError::from_response(status, &text))
    }
}
