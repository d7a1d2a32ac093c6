//! Registration form values and validation.
//!
//! Photos and the avatar are browser files, so the form only carries text
//! values; callers pass the current photo count into [`RegistrationForm::validate`].

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use crate::field::{Field, FieldErrors};
use crate::rules;

/// Multipart key for the single avatar file.
pub const AVATAR_PART: &str = "avatar";

/// Values entered on the registration page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationForm {
    /// Check every field plus the number of selected photos.
    /// The avatar is optional and never validated.
    #[must_use]
    pub fn validate(&self, photo_count: usize) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.record(Field::Email, rules::check_email(&self.email));
        errors.record(Field::Password, rules::check_password(&self.password));
        errors.record(Field::FirstName, rules::check_first_name(&self.first_name));
        errors.record(Field::LastName, rules::check_last_name(&self.last_name));
        errors.record(Field::Photos, rules::check_photo_count(photo_count));
        errors
    }

    /// Text parts of the multipart body, keyed by wire name.
    #[must_use]
    pub fn text_parts(&self) -> [(&'static str, &str); 4] {
        [
            (Field::Email.wire_name(), self.email.as_str()),
            (Field::Password.wire_name(), self.password.as_str()),
            (Field::FirstName.wire_name(), self.first_name.as_str()),
            (Field::LastName.wire_name(), self.last_name.as_str()),
        ]
    }
}
