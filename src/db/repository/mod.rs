//! Repository trait definitions for storage operations.
//!
//! This module provides a collection of focused repository traits that
//! abstract storage operations. By splitting responsibilities across
//! multiple traits, implementations can be more focused and testable.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`users`]: User upsert and lookup
//! - [`schedules`]: Schedule storage, lookup, and per-user listing
//! - [`candidates`]: Candidate slot storage with store-assigned ids
//! - [`availability`]: Availability entry upserts and ordered reads
//! - [`comments`]: Per-user schedule comments
//!
//! # Trait Composition
//!
//! A complete repository implementation implements all traits:
//!
//! ```ignore
//! impl UserRepository for MyRepo { ... }
//! impl ScheduleRepository for MyRepo { ... }
//! impl CandidateRepository for MyRepo { ... }
//! impl AvailabilityRepository for MyRepo { ... }
//! impl CommentRepository for MyRepo { ... }
//! ```
//!
//! # Convenience Trait Bound
//!
//! For functions that need all repository capabilities, use the
//! [`FullRepository`] trait bound:
//!
//! ```ignore
//! async fn my_service<R: FullRepository>(repo: &R) -> RepositoryResult<()> {
//!     repo.upsert_user(&user).await?;
//!     repo.store_schedule(&schedule).await?;
//!     Ok(())
//! }
//! ```

pub mod availability;
pub mod candidates;
pub mod comments;
pub mod error;
pub mod schedules;
pub mod users;

// Re-export error types
pub use error::{RepositoryError, RepositoryResult};

// Re-export all traits
pub use availability::AvailabilityRepository;
pub use candidates::CandidateRepository;
pub use comments::CommentRepository;
pub use schedules::ScheduleRepository;
pub use users::UserRepository;

/// Composite trait bound for a complete repository implementation.
///
/// This trait is automatically implemented for any type that implements
/// all five repository traits. Use this as a convenient bound when you
/// need access to all repository operations.
pub trait FullRepository:
    UserRepository
    + ScheduleRepository
    + CandidateRepository
    + AvailabilityRepository
    + CommentRepository
{
}

// Blanket implementation: any type implementing all five traits automatically implements FullRepository
impl<T> FullRepository for T where
    T: UserRepository
        + ScheduleRepository
        + CandidateRepository
        + AvailabilityRepository
        + CommentRepository
{
}
