//! Comment repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::ScheduleId;
use crate::models::Comment;

/// Repository trait for per-user schedule comments.
///
/// One comment per (schedule, user) pair; a later write replaces the
/// earlier text.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert or replace one user's comment on a schedule.
    ///
    /// # Returns
    /// * `Ok(())` - The comment is stored
    /// * `Err(RepositoryError)` - If the operation fails
    async fn upsert_comment(&self, comment: &Comment) -> RepositoryResult<()>;

    /// Retrieve all comments of a schedule, ordered by `user_id` ascending.
    ///
    /// # Returns
    /// * `Ok(Vec<Comment>)` - The schedule's comments, possibly empty
    /// * `Err(RepositoryError)` - If the operation fails
    async fn fetch_comments(&self, schedule_id: ScheduleId) -> RepositoryResult<Vec<Comment>>;
}
