use crate::{ApiError, AuthenticatedUser};

use shop_auth::AuthContext;

use axum::{body::Body, extract::FromRequestParts, http::Request};

#[tokio::test]
async fn test_extractor_reads_context_from_extensions() {
    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(AuthContext {
        user_id: 42,
        username: "alice".to_string(),
    });

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

    let AuthenticatedUser(context) = result.unwrap();
    assert_eq!(context.user_id, 42);
    assert_eq!(context.username, "alice");
}

#[tokio::test]
async fn test_extractor_without_context_is_unauthorized() {
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
