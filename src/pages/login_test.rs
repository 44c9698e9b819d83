use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  a@b.com ", "secret1"),
        Ok(AuthCredentials { email: "a@b.com".to_owned(), password: "secret1".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secret1"), Err("Please fill in all fields"));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Please fill in all fields"));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let credentials = validate_login_input("a@b.com", " pw ").unwrap();
    assert_eq!(credentials.password, " pw ");
}
