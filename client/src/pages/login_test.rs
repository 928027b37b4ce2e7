use super::*;

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  ana@verdant.io ", " secret "),
        Ok(("ana@verdant.io".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("ana@verdant.io", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_rejects_malformed_email() {
    assert_eq!(validate_login_input("ana", "pw"), Err("Enter a valid email address."));
}
