//! Core schedule repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::{ScheduleId, UserId};
use crate::models::Schedule;

/// Repository trait for schedule storage.
///
/// Schedules are created whole (the id is minted by the caller) and never
/// edited afterwards, so the surface is store / get / list.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    // ==================== Health & Connection ====================

    /// Check if the backing store is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if the store is healthy
    /// - `Ok(false)` if the store is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    // ==================== Schedule Operations ====================

    /// Store a new schedule.
    ///
    /// # Arguments
    /// * `schedule` - The schedule to store, id and timestamps already set
    ///
    /// # Returns
    /// * `Ok(())` - The schedule is stored
    /// * `Err(RepositoryError)` - If the operation fails
    async fn store_schedule(&self, schedule: &Schedule) -> RepositoryResult<()>;

    /// Retrieve a schedule by id.
    ///
    /// # Arguments
    /// * `schedule_id` - The id of the schedule to retrieve
    ///
    /// # Returns
    /// * `Ok(Schedule)` - The stored schedule
    /// * `Err(RepositoryError::NotFound)` - If the schedule doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_schedule(&self, schedule_id: ScheduleId) -> RepositoryResult<Schedule>;

    /// List the schedules created by one user.
    ///
    /// # Ordering contract
    /// Results are ordered by `updated_at` descending (most recently written
    /// first). Callers rely on this and do not re-sort.
    ///
    /// # Arguments
    /// * `created_by` - The creating user
    ///
    /// # Returns
    /// * `Ok(Vec<Schedule>)` - The user's schedules, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn list_schedules_for_user(&self, created_by: UserId) -> RepositoryResult<Vec<Schedule>>;
}
