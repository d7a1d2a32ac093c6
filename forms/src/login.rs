//! Login form values and validation.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::field::{Field, FieldErrors};
use crate::rules;

/// Values entered on the login page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Check every field; an empty result means the form can be sent.
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(Field::Email, rules::check_email(&self.email));
        errors.record(Field::Password, rules::check_password(&self.password));
        errors
    }

    /// Text parts of the multipart body, keyed by wire name.
    #[must_use]
    pub fn text_parts(&self) -> [(&'static str, &str); 2] {
        [
            (Field::Email.wire_name(), self.email.as_str()),
            (Field::Password.wire_name(), self.password.as_str()),
        ]
    }
}
