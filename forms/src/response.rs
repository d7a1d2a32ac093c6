//! Interpretation of API response bodies.
//!
//! The API answers both success and failure with `{ "msg": string }`. Status
//! 411 failures carry a wrapped message of the form
//! `"<prefix>: <human text> (code <n>)"`; only the human text is shown.
//!
//! ERROR HANDLING
//! ==============
//! Bodies that are not JSON, or that lack `msg`, never fail the caller: they
//! degrade to a generic status message so the user always sees something.

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;

use serde::Deserialize;

/// HTTP status whose messages are wrapped with a prefix and an error code.
pub const CODED_ERROR_STATUS: u16 = 411;

/// Body shape shared by success and error responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub msg: Option<String>,
}

impl ApiMessage {
    /// Parse `body`, returning `msg` if it has any non-whitespace text.
    #[must_use]
    pub fn parse_msg(body: &str) -> Option<String> {
        serde_json::from_str::<Self>(body)
            .ok()
            .and_then(|m| m.msg)
            .filter(|msg| !msg.trim().is_empty())
    }
}

/// Failure of a form submission against the remote API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The request could not be assembled in the browser.
    #[error("could not build request: {0}")]
    Request(String),
    /// Called outside a browser (SSR render or host tests).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a [`ApiError::Rejected`] from a status code and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: failure_message(status, body) }
    }
}

/// Message from a success body, if the API sent one.
#[must_use]
pub fn success_message(body: &str) -> Option<String> {
    ApiMessage::parse_msg(body)
}

/// Human text between the first `": "` and the `"(code"` marker.
///
/// A missing prefix starts the slice at the beginning; a missing code marker
/// runs it to the end. When nothing is left the whole message is returned.
#[must_use]
pub fn extract_coded_message(msg: &str) -> &str {
    let start = msg.find(": ").map_or(0, |i| i + 2);
    let rest = &msg[start..];
    let end = rest.find("(code").unwrap_or(rest.len());
    let text = rest[..end].trim();
    if text.is_empty() { msg.trim() } else { text }
}

/// User-facing message for a failed response.
#[must_use]
pub fn failure_message(status: u16, body: &str) -> String {
    match ApiMessage::parse_msg(body) {
        Some(msg) if status == CODED_ERROR_STATUS => extract_coded_message(&msg).to_owned(),
        Some(msg) => msg,
        None => format!("Request failed with status {status}"),
    }
}
