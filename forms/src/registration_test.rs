use super::*;
use crate::rules::{
    FIRST_NAME_LENGTH_INVALID, LAST_NAME_REQUIRED, PASSWORD_LENGTH_INVALID, PHOTOS_TOO_FEW,
};

fn valid_form() -> RegistrationForm {
    RegistrationForm {
        email: "jane@example.com".to_owned(),
        password: "secret1".to_owned(),
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
    }
}

#[test]
fn valid_registration_with_four_photos_passes() {
    assert!(valid_form().validate(4).is_empty());
}

#[test]
fn three_photos_is_rejected() {
    let errors = valid_form().validate(3);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Photos), Some(PHOTOS_TOO_FEW));
}

#[test]
fn every_failing_field_is_reported_together() {
    let form = RegistrationForm {
        email: "jane@example.com".to_owned(),
        password: "short".to_owned(),
        first_name: "J".to_owned(),
        last_name: String::new(),
    };
    let errors = form.validate(0);
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_LENGTH_INVALID));
    assert_eq!(errors.get(Field::FirstName), Some(FIRST_NAME_LENGTH_INVALID));
    assert_eq!(errors.get(Field::LastName), Some(LAST_NAME_REQUIRED));
    assert_eq!(errors.get(Field::Photos), Some(PHOTOS_TOO_FEW));
    assert!(!errors.contains(Field::Email));
}

#[test]
fn text_parts_use_camel_case_wire_names() {
    let form = valid_form();
    let keys: Vec<&str> = form.text_parts().iter().map(|(key, _)| *key).collect();
    assert_eq!(keys, ["email", "password", "firstName", "lastName"]);
}
