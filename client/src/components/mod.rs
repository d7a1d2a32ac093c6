//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome (navbar, toasts) and form pieces while
//! reading/writing shared state from Leptos context providers.

pub mod field_error;
pub mod navbar;
pub mod photo_grid;
pub mod toast;
