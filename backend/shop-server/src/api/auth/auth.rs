//! Registration and login handlers

use crate::{
    ApiResult, AppState, LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
    api::auth::register_response::REGISTRATION_SUCCESS_MESSAGE,
};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let Json(request) = payload?;

    let user = state.registration.register(request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: REGISTRATION_SUCCESS_MESSAGE.to_string(),
            user: user.into(),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Returns a bearer token for `Authorization: Bearer <token>`.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<LoginResponse>> {
    let Json(request) = payload?;

    let outcome = state.login.login(request.into()).await?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        expires_at: outcome.expires_at,
        user: outcome.user.into(),
    }))
}
