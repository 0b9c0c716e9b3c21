use crate::{AppState, api, health, middleware::auth_gate};

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    // Everything here requires a valid bearer token
    let protected = Router::new()
        .route("/api/v1/profile", get(api::profile::profile::get_profile))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_gate::require_auth,
        ));

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Public auth endpoints
        .route("/api/v1/auth/register", post(api::auth::auth::register))
        .route("/api/v1/auth/login", post(api::auth::auth::login))
        .merge(protected)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
