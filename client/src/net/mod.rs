//! Networking modules for the remote user API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the multipart form submissions; request/response contracts
//! live in the `forms` crate so they can be tested without a browser.

pub mod api;
