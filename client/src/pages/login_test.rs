use super::*;
use forms::rules::{EMAIL_REQUIRED, PASSWORD_DIGIT_MISSING};

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.to_owned() }
}

#[test]
fn valid_form_is_ready_to_send() {
    assert_eq!(prepare_submit(false, form("a@b.com", "abc123")), SubmitGate::Ready(form("a@b.com", "abc123")));
}

#[test]
fn invalid_form_yields_errors_instead_of_a_request() {
    let SubmitGate::Invalid(errors) = prepare_submit(false, form("", "abcdef")) else {
        panic!("expected inline errors");
    };
    assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_DIGIT_MISSING));
}

#[test]
fn busy_page_ignores_submit_even_when_valid() {
    assert_eq!(prepare_submit(true, form("a@b.com", "abc123")), SubmitGate::Busy);
}

#[test]
fn busy_check_runs_before_validation() {
    assert_eq!(prepare_submit(true, form("", "")), SubmitGate::Busy);
}
