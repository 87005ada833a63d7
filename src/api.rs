//! Public API surface for the coordination backend.
//!
//! This file consolidates the identifier newtypes and re-exports the DTO
//! types used by the HTTP layer. All types derive Serialize/Deserialize for
//! JSON serialization.

pub use crate::models::availability::{Availability, AvailabilityEntry};
pub use crate::models::comment::Comment;
pub use crate::models::schedule::{Candidate, Schedule};
pub use crate::models::user::{User, Viewer};
pub use crate::services::matrix::{AvailabilityMatrix, MatrixCell, MatrixRow};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User identifier, assigned by the upstream identity provider.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

/// Schedule identifier (UUID v4, assigned at creation).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScheduleId(pub Uuid);

/// Candidate identifier, assigned ascending by the store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub i64);

impl UserId {
    pub fn new(value: i64) -> Self {
        UserId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl ScheduleId {
    pub fn new(value: Uuid) -> Self {
        ScheduleId(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl CandidateId {
    pub fn new(value: i64) -> Self {
        CandidateId(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for ScheduleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i64 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl From<CandidateId> for i64 {
    fn from(id: CandidateId) -> Self {
        id.0
    }
}

impl From<ScheduleId> for Uuid {
    fn from(id: ScheduleId) -> Self {
        id.0
    }
}

/// Everything the schedule detail page needs, assembled by the service
/// layer in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDetail {
    pub schedule: Schedule,
    /// Candidates ordered by id ascending.
    pub candidates: Vec<Candidate>,
    /// User-by-candidate attendance grid, viewer row first.
    pub matrix: AvailabilityMatrix,
    /// Comments ordered by user id ascending.
    pub comments: Vec<Comment>,
}
