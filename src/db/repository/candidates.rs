//! Candidate repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{CandidateId, ScheduleId};
use crate::models::Candidate;

/// Repository trait for candidate slots.
///
/// Candidate ids are assigned by the store, ascending in insertion order,
/// so a schedule's candidates display in the order they were submitted.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Insert candidates for a schedule, in the given order.
    ///
    /// # Arguments
    /// * `schedule_id` - The owning schedule
    /// * `candidate_names` - Display names, already normalized
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The stored candidates with assigned ids,
    ///   in input order
    /// * `Err(RepositoryError)` - If the operation fails
    async fn add_candidates(
        &self,
        schedule_id: ScheduleId,
        candidate_names: &[String],
    ) -> RepositoryResult<Vec<Candidate>>;

    /// Retrieve all candidates of a schedule.
    ///
    /// # Ordering contract
    /// Results are ordered by `candidate_id` ascending. The availability
    /// matrix derives its column order from this and does not re-sort.
    ///
    /// # Arguments
    /// * `schedule_id` - The owning schedule
    ///
    /// # Returns
    /// * `Ok(Vec<Candidate>)` - The schedule's candidates; empty when the
    ///   schedule has none or doesn't exist (existence is the caller's check)
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_candidates(&self, schedule_id: ScheduleId) -> RepositoryResult<Vec<Candidate>>;

    /// Retrieve a single candidate by id.
    ///
    /// # Returns
    /// * `Ok(Candidate)` - The stored candidate
    /// * `Err(RepositoryError::NotFound)` - If the candidate doesn't exist
    async fn get_candidate(&self, candidate_id: CandidateId) -> RepositoryResult<Candidate>;
}
