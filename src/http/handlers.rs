//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use super::auth::BearerToken;
use super::dto::{
    AvailabilityRequest, AvailabilityUpdatedResponse, CommentRequest, CommentUpdatedResponse,
    CreateScheduleRequest, HealthResponse, LoginRequest, LoginResponse, ScheduleCreatedResponse,
    ScheduleDetail, ScheduleListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{CandidateId, ScheduleId, UserId};
use crate::db::services as db_services;
use crate::models::Viewer;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accepting writes.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /auth/login
///
/// Upsert the user and mint a bearer token for subsequent requests.
/// Logging in again with the same id refreshes the stored username and
/// issues a fresh token; earlier tokens stay valid until logout.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> HandlerResult<LoginResponse> {
    if request.username.trim().is_empty() {
        return Err(AppError::BadRequest("username must not be empty".to_string()));
    }

    let user = db_services::login_user(
        state.repository.as_ref(),
        UserId::new(request.user_id),
        &request.username,
    )
    .await?;

    let token = state.sessions.create_session(Viewer::from(user.clone()));

    Ok(Json(LoginResponse { token, user }))
}

/// POST /auth/logout
///
/// Revoke the presented bearer token. Unknown tokens are a 401 so a
/// client can tell a stale token from a successful logout.
pub async fn logout(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<StatusCode, AppError> {
    if state.sessions.revoke_session(&token) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Unauthorized(
            "Unknown or expired session token".to_string(),
        ))
    }
}

// =============================================================================
// Schedules
// =============================================================================

/// GET /schedules
///
/// List the schedules created by the authenticated viewer, newest first.
pub async fn list_schedules(
    State(state): State<AppState>,
    viewer: Viewer,
) -> HandlerResult<ScheduleListResponse> {
    let schedules =
        db_services::list_schedules(state.repository.as_ref(), viewer.user_id).await?;
    let total = schedules.len();

    Ok(Json(ScheduleListResponse { schedules, total }))
}

/// POST /schedules
///
/// Create a schedule with its candidate dates. The candidate text is one
/// candidate per line; blank lines are dropped.
pub async fn create_schedule(
    State(state): State<AppState>,
    viewer: Viewer,
    Json(request): Json<CreateScheduleRequest>,
) -> Result<(StatusCode, Json<ScheduleCreatedResponse>), AppError> {
    let (schedule, candidates) = db_services::create_schedule(
        state.repository.as_ref(),
        &viewer,
        &request.schedule_name,
        &request.memo,
        &request.candidates,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ScheduleCreatedResponse {
            schedule,
            candidates,
        }),
    ))
}

/// GET /schedules/{schedule_id}
///
/// Get the full detail page payload for a schedule: the schedule itself,
/// its candidates, the availability matrix with the viewer's row first,
/// and the comments.
pub async fn get_schedule_detail(
    State(state): State<AppState>,
    viewer: Viewer,
    Path(schedule_id): Path<ScheduleId>,
) -> HandlerResult<ScheduleDetail> {
    let detail =
        db_services::get_schedule_detail(state.repository.as_ref(), schedule_id, &viewer).await?;

    Ok(Json(detail))
}

// =============================================================================
// Availability and Comments
// =============================================================================

/// POST /schedules/{schedule_id}/users/{user_id}/candidates/{candidate_id}
///
/// Record one user's availability for one candidate. A missing value in
/// the body defaults to unavailable.
pub async fn update_availability(
    State(state): State<AppState>,
    _viewer: Viewer,
    Path((schedule_id, user_id, candidate_id)): Path<(ScheduleId, UserId, CandidateId)>,
    Json(request): Json<AvailabilityRequest>,
) -> HandlerResult<AvailabilityUpdatedResponse> {
    let availability = db_services::update_availability(
        state.repository.as_ref(),
        schedule_id,
        user_id,
        candidate_id,
        request.availability.unwrap_or_default(),
    )
    .await?;

    Ok(Json(AvailabilityUpdatedResponse {
        status: "OK".to_string(),
        availability,
    }))
}

/// POST /schedules/{schedule_id}/users/{user_id}/comments
///
/// Set one user's comment on a schedule, replacing any previous comment.
/// Returns the stored text, which may be truncated.
pub async fn update_comment(
    State(state): State<AppState>,
    _viewer: Viewer,
    Path((schedule_id, user_id)): Path<(ScheduleId, UserId)>,
    Json(request): Json<CommentRequest>,
) -> HandlerResult<CommentUpdatedResponse> {
    let comment = db_services::update_comment(
        state.repository.as_ref(),
        schedule_id,
        user_id,
        &request.comment,
    )
    .await?;

    Ok(Json(CommentUpdatedResponse {
        status: "OK".to_string(),
        comment,
    }))
}
