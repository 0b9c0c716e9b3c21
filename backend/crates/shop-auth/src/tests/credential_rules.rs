use super::{alice_request, test_rules};
use crate::{AuthError, CredentialRules, LoginRequest, RegistrationRequest};

fn rejected_field(request: &RegistrationRequest) -> String {
    match test_rules().validate_registration(request) {
        Err(AuthError::Validation { field, .. }) => field,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn well_formed_registration_passes() {
    assert!(test_rules().validate_registration(&alice_request()).is_ok());
}

#[test]
fn username_length_bounds_are_inclusive() {
    let mut request = alice_request();

    request.username = "abc".to_string();
    assert!(test_rules().validate_registration(&request).is_ok());

    request.username = "a".repeat(50);
    assert!(test_rules().validate_registration(&request).is_ok());

    request.username = "ab".to_string();
    assert_eq!(rejected_field(&request), "username");

    request.username = "a".repeat(51);
    assert_eq!(rejected_field(&request), "username");
}

#[test]
fn username_with_surrounding_whitespace_is_rejected() {
    let mut request = alice_request();
    request.username = " alice".to_string();

    assert_eq!(rejected_field(&request), "username");
}

#[test]
fn email_must_look_like_an_address() {
    for email in ["", "alice", "alice@", "@x.com", "alice@x", "a lice@x.com"] {
        let mut request = alice_request();
        request.email = email.to_string();
        assert_eq!(rejected_field(&request), "email", "{email:?}");
    }
}

#[test]
fn email_longer_than_limit_is_rejected() {
    let mut request = alice_request();
    request.email = format!("{}@x.com", "a".repeat(95));

    assert_eq!(rejected_field(&request), "email");
}

#[test]
fn password_shorter_than_minimum_is_rejected() {
    let mut request = alice_request();
    request.password = "12345".to_string();

    assert_eq!(rejected_field(&request), "password");
}

#[test]
fn password_past_bcrypt_limit_is_rejected() {
    let mut request = alice_request();

    request.password = "p".repeat(72);
    assert!(test_rules().validate_registration(&request).is_ok());

    request.password = "p".repeat(73);
    assert_eq!(rejected_field(&request), "password");
}

#[test]
fn phone_is_required_and_bounded() {
    let mut request = alice_request();

    request.phone = "  ".to_string();
    assert_eq!(rejected_field(&request), "phone");

    request.phone = "1".repeat(16);
    assert_eq!(rejected_field(&request), "phone");
}

#[test]
fn first_failing_field_is_reported() {
    let request = RegistrationRequest {
        username: "ab".to_string(),
        email: "bad".to_string(),
        password: "1".to_string(),
        phone: String::new(),
    };

    assert_eq!(rejected_field(&request), "username");
}

#[test]
fn custom_bounds_are_honoured() {
    let rules = CredentialRules {
        min_password_length: 10,
        ..CredentialRules::default()
    };

    assert!(rules.validate_registration(&alice_request()).is_err());
}

#[test]
fn login_requires_both_fields() {
    let rules = test_rules();

    let missing_password = LoginRequest {
        username: "alice".to_string(),
        password: String::new(),
    };
    let missing_username = LoginRequest {
        username: String::new(),
        password: "secret1".to_string(),
    };

    assert_eq!(
        rules.validate_login(&missing_password).unwrap_err().field(),
        Some("password".to_string())
    );
    assert_eq!(
        rules.validate_login(&missing_username).unwrap_err().field(),
        Some("username".to_string())
    );
}

#[test]
fn debug_output_redacts_password() {
    let rendered = format!("{:?}", alice_request());

    assert!(!rendered.contains("secret1"));
    assert!(rendered.contains("<redacted>"));
}
