use crate::{ApiError, ApiResult, AppState, AuthenticatedUser, ProfileResponse};

use std::panic::Location;

use axum::{Json, extract::State};
use error_location::ErrorLocation;

/// GET /api/v1/profile
///
/// Tokens outlive deleted accounts, so a verified caller can still get 404.
pub async fn get_profile(
    State(state): State<AppState>,
    AuthenticatedUser(context): AuthenticatedUser,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state
        .users
        .find_by_id(context.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", context.user_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
