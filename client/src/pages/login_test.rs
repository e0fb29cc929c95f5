use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  a@b.com ", " pass word "),
        Ok(("a@b.com".to_owned(), " pass word ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "secret"), Err(MISSING_FIELDS));
    assert_eq!(validate_login_input("a@b.com", "   "), Err(MISSING_FIELDS));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("ab.com", "secret"), Err(INVALID_EMAIL));
    assert_eq!(validate_login_input("@b.com", "secret"), Err(INVALID_EMAIL));
    assert_eq!(validate_login_input("a@", "secret"), Err(INVALID_EMAIL));
    assert_eq!(validate_login_input("a@b@c", "secret"), Err(INVALID_EMAIL));
}
