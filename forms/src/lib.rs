//! Shared form contract for the portal pages.
//!
//! This crate owns everything the login and registration pages agree on with
//! the remote API: field names, validation rules and messages, accepted image
//! types, and how success/error bodies turn into user-facing text. It has no
//! browser dependency so the rules are testable on the host.

pub mod field;
pub mod image;
pub mod login;
pub mod registration;
pub mod response;
pub mod rules;

pub use field::{Field, FieldErrors};
pub use image::{INVALID_IMAGE_MESSAGE, is_accepted_image};
pub use login::LoginForm;
pub use registration::{AVATAR_PART, RegistrationForm};
pub use response::{ApiError, ApiMessage, extract_coded_message, failure_message, success_message};
