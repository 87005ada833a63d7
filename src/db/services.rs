//! High-level service layer over the repository traits.
//!
//! This module provides repository-agnostic operations that work with any
//! implementation of the repository traits. The business rules live here:
//! input normalization on schedule creation, existence checks before
//! availability and comment writes, and the assembly of the schedule detail
//! (including the availability matrix) in one pass.
//!
//! # Usage
//!
//! ```no_run
//! use rsvp_rust::api::UserId;
//! use rsvp_rust::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!
//!     let user = services::login_user(&repo, UserId::new(1), "alice").await?;
//!     let schedules = services::list_schedules(&repo, user.user_id).await?;
//!     println!("Found {} schedules", schedules.len());
//!
//!     Ok(())
//! }
//! ```

use chrono::Utc;
use log::info;
use uuid::Uuid;

use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::api::{Availability, CandidateId, ScheduleDetail, ScheduleId, UserId};
use crate::models::{
    normalize_comment, normalize_memo, normalize_schedule_name, parse_candidate_names, Candidate,
    Comment, Schedule, User, Viewer,
};
use crate::services::matrix::AvailabilityMatrixBuilder;

// ==================== Health & Connection ====================

/// Check if the backing store is healthy.
///
/// This is a simple pass-through to the repository's health check.
///
/// # Arguments
/// * `repo` - Repository implementation
///
/// # Returns
/// * `Ok(true)` if the store is healthy
/// * `Err` if the check fails
pub async fn health_check<R: FullRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

// ==================== Users & Login ====================

/// Record a login: upsert the user under their provider-assigned id.
///
/// Logging in again with a changed username overwrites the stored one, so
/// every later read (listings, matrix rows) shows the current name.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `user_id` - Provider-assigned user id
/// * `username` - Current display name
///
/// # Returns
/// * `Ok(User)` - The stored user
/// * `Err` if the write fails
pub async fn login_user<R: FullRepository + ?Sized>(
    repo: &R,
    user_id: UserId,
    username: &str,
) -> RepositoryResult<User> {
    info!("Service layer: login for user_id={}", user_id);

    let user = User::new(user_id, username);
    repo.upsert_user(&user).await?;
    Ok(user)
}

// ==================== Schedule Operations ====================

/// Create a schedule with its candidate slots.
///
/// Normalizes the input first: the name is cut to 255 characters and falls
/// back to `"(untitled)"` when empty, the memo is cut to 500 characters,
/// and the candidate block is split into trimmed non-empty lines. A block
/// with no usable lines yields a schedule without candidates.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `viewer` - The creating user
/// * `schedule_name` - Requested name, normalized here
/// * `memo` - Requested memo, normalized here
/// * `candidate_text` - Newline-separated candidate names
///
/// # Returns
/// * `Ok((Schedule, Vec<Candidate>))` - The stored schedule and its
///   candidates in display order
/// * `Err` if storage fails
pub async fn create_schedule<R: FullRepository + ?Sized>(
    repo: &R,
    viewer: &Viewer,
    schedule_name: &str,
    memo: &str,
    candidate_text: &str,
) -> RepositoryResult<(Schedule, Vec<Candidate>)> {
    let schedule = Schedule::new(
        ScheduleId::new(Uuid::new_v4()),
        normalize_schedule_name(schedule_name),
        normalize_memo(memo),
        viewer.user_id,
        Utc::now(),
    );
    let candidate_names = parse_candidate_names(candidate_text);

    info!(
        "Service layer: creating schedule '{}' ({} candidates) for user_id={}",
        schedule.schedule_name,
        candidate_names.len(),
        viewer.user_id,
    );

    repo.store_schedule(&schedule).await?;
    let candidates = repo
        .add_candidates(schedule.schedule_id, &candidate_names)
        .await?;

    Ok((schedule, candidates))
}

/// List the schedules a user created, most recently written first.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `created_by` - The creating user
///
/// # Returns
/// * `Ok(Vec<Schedule>)` - The user's schedules
/// * `Err` if the query fails
pub async fn list_schedules<R: FullRepository + ?Sized>(
    repo: &R,
    created_by: UserId,
) -> RepositoryResult<Vec<Schedule>> {
    info!("Service layer: listing schedules for user_id={}", created_by);
    repo.list_schedules_for_user(created_by).await
}

/// Assemble everything the schedule detail page needs.
///
/// Fetches the schedule (absent → `NotFound`, before any matrix work), its
/// candidates and availability entries in store order, and the comments,
/// then builds the availability matrix with the viewer injected.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `schedule_id` - The schedule to assemble
/// * `viewer` - The requesting user, always present as a matrix row
///
/// # Returns
/// * `Ok(ScheduleDetail)` - Schedule, candidates, matrix, and comments
/// * `Err(RepositoryError::NotFound)` - If the schedule doesn't exist
/// * `Err` if a query fails
pub async fn get_schedule_detail<R: FullRepository + ?Sized>(
    repo: &R,
    schedule_id: ScheduleId,
    viewer: &Viewer,
) -> RepositoryResult<ScheduleDetail> {
    info!(
        "Service layer: assembling detail for schedule_id={} viewer={}",
        schedule_id, viewer.user_id
    );

    let schedule = repo.get_schedule(schedule_id).await?;
    let candidates = repo.get_candidates(schedule_id).await?;
    let entries = repo.fetch_availabilities(schedule_id).await?;
    let comments = repo.fetch_comments(schedule_id).await?;

    let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, viewer).build();

    Ok(ScheduleDetail {
        schedule,
        candidates,
        matrix,
        comments,
    })
}

// ==================== Availability Operations ====================

/// Record one user's availability for one candidate.
///
/// The schedule must exist, the candidate must belong to it, and the user
/// must be known; any mismatch is `NotFound`. This keeps the store free of
/// entries pointing at foreign candidates. The write is an upsert: the new
/// value replaces a previous answer for the same (user, candidate) pair.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `schedule_id` - The schedule the candidate belongs to
/// * `user_id` - The responding user
/// * `candidate_id` - The candidate slot being answered
/// * `availability` - The new value
///
/// # Returns
/// * `Ok(Availability)` - The stored value
/// * `Err(RepositoryError::NotFound)` - Unknown schedule, user, or
///   candidate, or a candidate of a different schedule
/// * `Err` if the write fails
pub async fn update_availability<R: FullRepository + ?Sized>(
    repo: &R,
    schedule_id: ScheduleId,
    user_id: UserId,
    candidate_id: CandidateId,
    availability: Availability,
) -> RepositoryResult<Availability> {
    info!(
        "Service layer: availability upsert schedule_id={} user_id={} candidate_id={} value={}",
        schedule_id,
        user_id,
        candidate_id,
        availability.as_u8(),
    );

    repo.get_schedule(schedule_id).await?;
    let candidate = repo.get_candidate(candidate_id).await?;
    if candidate.schedule_id != schedule_id {
        return Err(RepositoryError::NotFound(format!(
            "Candidate {} does not belong to schedule {}",
            candidate_id, schedule_id
        )));
    }
    repo.get_user(user_id).await?;

    repo.upsert_availability(schedule_id, user_id, candidate_id, availability)
        .await?;
    Ok(availability)
}

// ==================== Comment Operations ====================

/// Record one user's comment on a schedule, replacing any earlier one.
///
/// The schedule and the user must exist. The text is cut to 255 characters
/// before storage.
///
/// # Arguments
/// * `repo` - Repository implementation
/// * `schedule_id` - The commented schedule
/// * `user_id` - The commenting user
/// * `comment` - The comment text, normalized here
///
/// # Returns
/// * `Ok(String)` - The stored text
/// * `Err(RepositoryError::NotFound)` - Unknown schedule or user
/// * `Err` if the write fails
pub async fn update_comment<R: FullRepository + ?Sized>(
    repo: &R,
    schedule_id: ScheduleId,
    user_id: UserId,
    comment: &str,
) -> RepositoryResult<String> {
    info!(
        "Service layer: comment upsert schedule_id={} user_id={}",
        schedule_id, user_id
    );

    repo.get_schedule(schedule_id).await?;
    repo.get_user(user_id).await?;

    let stored = Comment::new(schedule_id, user_id, normalize_comment(comment));
    repo.upsert_comment(&stored).await?;
    Ok(stored.comment)
}
