//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and submit flow and delegates rendering
//! details to `components`.

pub mod login;
pub mod register;
pub mod success;

use forms::FieldErrors;

pub const LOGIN_ROUTE: &str = "/login";
pub const REGISTER_ROUTE: &str = "/register";
pub const SUCCESS_ROUTE: &str = "/success";
/// Served outside this app; reached with a full page load.
pub const PROFILE_ROUTE: &str = "/profile";

/// What a submit press should do with the current form values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitGate<F> {
    /// A request is already in flight; the press is ignored.
    Busy,
    /// Show these errors inline and send nothing.
    Invalid(FieldErrors),
    /// Clear errors and send the form.
    Ready(F),
}
