#![allow(dead_code)]

//! Test infrastructure for shop-server API tests

use shop_auth::{CredentialRules, PasswordHasher, TokenIssuer};
use shop_db::UserRepository;
use shop_server::AppState;

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-secret-32-chars!!";
pub const TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// AppState over a fresh in-memory database, bcrypt at its cheapest cost
pub async fn create_test_app_state() -> AppState {
    let pool = shop_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        UserRepository::new(pool),
        PasswordHasher::new(PasswordHasher::MIN_COST).expect("valid cost"),
        TEST_JWT_SECRET.as_bytes(),
        TOKEN_TTL,
        CredentialRules::default(),
    )
    .expect("Failed to build app state")
}

/// Issuer sharing the server's secret, for hand-made tokens
pub fn test_issuer() -> TokenIssuer {
    TokenIssuer::with_hs256(TEST_JWT_SECRET.as_bytes(), TOKEN_TTL)
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(value) = authorization {
        builder = builder.header("authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub fn register_body(username: &str, email: &str, password: &str, phone: &str) -> Value {
    json!({
        "username": username,
        "email": email,
        "password": password,
        "phone": phone,
    })
}

pub async fn register(app: &Router, username: &str, email: &str, password: &str) -> Response<Body> {
    send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/register",
            register_body(username, email, password, "555"),
        ),
    )
    .await
}

pub async fn login(app: &Router, username: &str, password: &str) -> Response<Body> {
    send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/login",
            json!({ "username": username, "password": password }),
        ),
    )
    .await
}

/// Log in and return the bearer token
pub async fn login_token(app: &Router, username: &str, password: &str) -> String {
    let json = body_json(login(app, username, password).await).await;
    json["token"].as_str().expect("token in login response").to_string()
}
