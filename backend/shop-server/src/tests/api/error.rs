use crate::ApiError;
use crate::api::error::{INTERNAL_ERROR_MESSAGE, INVALID_CREDENTIALS_MESSAGE};

use shop_auth::AuthError;

use std::panic::Location;

use axum::response::{IntoResponse, Response};
use error_location::ErrorLocation;
use http::StatusCode;
use http::header::WWW_AUTHENTICATE;
use http_body_util::BodyExt;

async fn json_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::from(AuthError::validation("username", "username is too short"));
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "username");
    assert_eq!(json["error"]["message"], "username is too short");
}

#[tokio::test]
async fn test_duplicate_errors_return_409_with_distinct_codes() {
    let cases = [
        (
            AuthError::DuplicateUsername {
                location: ErrorLocation::from(Location::caller()),
            },
            "DUPLICATE_USERNAME",
        ),
        (
            AuthError::DuplicateEmail {
                location: ErrorLocation::from(Location::caller()),
            },
            "DUPLICATE_EMAIL",
        ),
        (
            AuthError::RegistrationConflict {
                location: ErrorLocation::from(Location::caller()),
            },
            "REGISTRATION_CONFLICT",
        ),
    ];

    for (error, code) in cases {
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = json_body(response).await;
        assert_eq!(json["error"]["code"], code);
        assert!(json["error"].get("field").is_none());
    }
}

#[tokio::test]
async fn test_invalid_credentials_returns_fixed_401() {
    let response = ApiError::from(AuthError::invalid_credentials()).into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], INVALID_CREDENTIALS_MESSAGE);
}

#[tokio::test]
async fn test_every_token_rejection_renders_identically() {
    let errors = vec![
        AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidScheme {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::TokenExpired {
            location: ErrorLocation::from(Location::caller()),
        },
        AuthError::InvalidClaim {
            claim: "sub".into(),
            message: "sub does not match user_id".into(),
            location: ErrorLocation::from(Location::caller()),
        },
    ];

    let mut bodies = Vec::new();
    for error in errors {
        let response = ApiError::from(error).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
        bodies.push(json_body(response).await);
    }

    assert_eq!(bodies[0]["error"]["code"], "UNAUTHORIZED");
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}

#[tokio::test]
async fn test_internal_error_hides_detail() {
    let error = AuthError::BlockingTask {
        message: "worker panicked at secret location".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = ApiError::from(error).into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let error = ApiError::NotFound {
        message: "User 7 not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 7 not found");
}
