//! Availability repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{CandidateId, ScheduleId, UserId};
use crate::models::{Availability, AvailabilityEntry};

/// Repository trait for availability entries.
///
/// At most one entry exists per (user, candidate) pair; writes go through
/// `upsert_availability` and the newest value replaces any previous one.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    /// Insert or replace one user's availability for one candidate.
    ///
    /// # Arguments
    /// * `schedule_id` - The schedule the candidate belongs to
    /// * `user_id` - The responding user
    /// * `candidate_id` - The candidate slot being answered
    /// * `availability` - The new value
    ///
    /// # Returns
    /// * `Ok(())` - The entry is stored
    /// * `Err(RepositoryError)` - If the operation fails
    async fn upsert_availability(
        &self,
        schedule_id: ScheduleId,
        user_id: UserId,
        candidate_id: CandidateId,
        availability: Availability,
    ) -> RepositoryResult<()>;

    /// Retrieve all availability entries of a schedule, with each entry
    /// annotated with the owning user's current username.
    ///
    /// # Ordering contract
    /// Results are ordered by `username` ascending, then `candidate_id`
    /// ascending. The availability matrix derives its row order from this
    /// and does not re-sort.
    ///
    /// # Arguments
    /// * `schedule_id` - The schedule whose entries to fetch
    ///
    /// # Returns
    /// * `Ok(Vec<AvailabilityEntry>)` - The entries, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_availabilities(
        &self,
        schedule_id: ScheduleId,
    ) -> RepositoryResult<Vec<AvailabilityEntry>>;
}
