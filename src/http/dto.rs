//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The domain types already derive Serialize/Deserialize and serialize to
//! clean JSON (id newtypes flatten to their inner value), so they are
//! re-exported as-is; this module adds the request bodies and the response
//! envelopes around them.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    Availability, AvailabilityMatrix, Candidate, Comment, MatrixCell, MatrixRow, Schedule,
    ScheduleDetail, User,
};

/// Request body for logging in.
///
/// The identity is taken as reported by the upstream provider; this service
/// does not run the OAuth handshake itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Provider-assigned user id
    pub user_id: i64,
    /// Current display name
    pub username: String,
}

/// Response for a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests
    pub token: String,
    /// The stored user
    pub user: User,
}

/// Request body for creating a new schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    /// Name for the schedule (empty becomes "(untitled)")
    #[serde(default)]
    pub schedule_name: String,
    /// Free-form description
    #[serde(default)]
    pub memo: String,
    /// Candidate slots, one per line
    #[serde(default)]
    pub candidates: String,
}

/// Response for schedule creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCreatedResponse {
    /// The stored schedule
    pub schedule: Schedule,
    /// Its candidates in display order
    pub candidates: Vec<Candidate>,
}

/// Schedule list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleListResponse {
    /// The viewer's schedules, most recently written first
    pub schedules: Vec<Schedule>,
    /// Total count
    pub total: usize,
}

/// Request body for recording availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// New value; omitting it means unavailable. Integers outside 0..=2
    /// are rejected during deserialization.
    #[serde(default)]
    pub availability: Option<Availability>,
}

/// Acknowledgement for an availability upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityUpdatedResponse {
    /// Always "OK"
    pub status: String,
    /// The stored value
    pub availability: Availability,
}

/// Request body for recording a comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    /// Comment text, cut to 255 characters before storage
    pub comment: String,
}

/// Acknowledgement for a comment upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentUpdatedResponse {
    /// Always "OK"
    pub status: String,
    /// The stored text
    pub comment: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Storage connection status
    pub database: String,
}
