//! Bearer-token gate for protected routes.
//!
//! Runs before the handler. A verified token puts an [`AuthContext`] into the
//! request extensions; anything else ends the request with one uniform 401.

use crate::{ApiResult, AppState};

use shop_auth::AuthContext;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    // A non-UTF-8 header value counts as absent.
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let context: AuthContext = state.jwt_validator.authorize(header)?;
    log::debug!("Authenticated user {} ({})", context.user_id, context.username);

    request.extensions_mut().insert(context);

    Ok(next.run(request).await)
}
