//! User repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::api::UserId;
use crate::models::User;

/// Repository trait for user storage.
///
/// Users arrive from an upstream identity provider, so there is no create
/// vs. update distinction: every login writes the user through `upsert_user`
/// and later reads observe the refreshed username.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, or overwrite the stored username when the id already
    /// exists.
    ///
    /// # Arguments
    /// * `user` - The user as reported by the identity provider
    ///
    /// # Returns
    /// * `Ok(())` - The user is stored
    /// * `Err(RepositoryError)` - If the operation fails
    async fn upsert_user(&self, user: &User) -> RepositoryResult<()>;

    /// Retrieve a user by id.
    ///
    /// # Arguments
    /// * `user_id` - The id of the user to retrieve
    ///
    /// # Returns
    /// * `Ok(User)` - The stored user
    /// * `Err(RepositoryError::NotFound)` - If the user doesn't exist
    /// * `Err(RepositoryError)` - If the operation fails
    async fn get_user(&self, user_id: UserId) -> RepositoryResult<User>;
}
