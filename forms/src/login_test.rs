use super::*;
use crate::rules::{EMAIL_INVALID, EMAIL_REQUIRED, PASSWORD_DIGIT_MISSING, PASSWORD_REQUIRED};

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn valid_login_has_no_errors() {
    assert!(form("a@b.com", "abc123").validate().is_empty());
}

#[test]
fn empty_login_reports_both_fields() {
    let errors = form("", "").validate();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
}

#[test]
fn login_reports_only_failing_field() {
    let errors = form("a@b", "abc123").validate();
    assert_eq!(errors.get(Field::Email), Some(EMAIL_INVALID));
    assert!(!errors.contains(Field::Password));

    let errors = form("a@b.com", "abcdef").validate();
    assert!(!errors.contains(Field::Email));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_DIGIT_MISSING));
}

#[test]
fn login_text_parts_use_wire_names() {
    let form = form("a@b.com", "abc123");
    assert_eq!(form.text_parts(), [("email", "a@b.com"), ("password", "abc123")]);
}
