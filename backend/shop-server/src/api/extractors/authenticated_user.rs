//! Axum extractor for the identity verified by the auth gate

use crate::ApiError;

use shop_auth::AuthContext;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// The caller's verified identity.
///
/// Only present on routes behind `middleware::auth_gate::require_auth`;
/// anywhere else extraction fails with 401.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthContext);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthContext>()
                .cloned()
                .map(AuthenticatedUser)
                .ok_or_else(|| ApiError::Unauthorized {
                    reason: "no verified identity on request".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
        }
    }
}
