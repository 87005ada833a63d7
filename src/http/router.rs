//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Sessions
        .route("/auth/login", post(handlers::login))
        .route("/auth/logout", post(handlers::logout))
        // Schedule CRUD
        .route("/schedules", get(handlers::list_schedules))
        .route("/schedules", post(handlers::create_schedule))
        .route("/schedules/{schedule_id}", get(handlers::get_schedule_detail))
        // Attendance input
        .route(
            "/schedules/{schedule_id}/users/{user_id}/candidates/{candidate_id}",
            post(handlers::update_availability),
        )
        .route(
            "/schedules/{schedule_id}/users/{user_id}/comments",
            post(handlers::update_comment),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
