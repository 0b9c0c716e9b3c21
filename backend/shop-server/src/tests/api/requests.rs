use crate::{LoginRequest, RegisterRequest};

#[test]
fn test_register_request_accepts_phone() {
    let request: RegisterRequest = serde_json::from_str(
        r#"{"username":"alice","email":"a@x.com","password":"secret1","phone":"555"}"#,
    )
    .unwrap();

    assert_eq!(request.phone, "555");
}

#[test]
fn test_register_request_accepts_nomor_telepon_alias() {
    let request: RegisterRequest = serde_json::from_str(
        r#"{"username":"alice","email":"a@x.com","password":"secret1","nomor_telepon":"555"}"#,
    )
    .unwrap();

    assert_eq!(request.phone, "555");
}

#[test]
fn test_register_request_without_phone_is_rejected() {
    let result: Result<RegisterRequest, _> = serde_json::from_str(
        r#"{"username":"alice","email":"a@x.com","password":"secret1"}"#,
    );

    assert!(result.is_err());
}

#[test]
fn test_request_debug_redacts_password() {
    let register: RegisterRequest = serde_json::from_str(
        r#"{"username":"alice","email":"a@x.com","password":"secret1","phone":"555"}"#,
    )
    .unwrap();
    let login: LoginRequest =
        serde_json::from_str(r#"{"username":"alice","password":"secret1"}"#).unwrap();

    assert!(!format!("{:?}", register).contains("secret1"));
    assert!(!format!("{:?}", login).contains("secret1"));
}
