//! Domain entities for schedule coordination.
//!
//! Persistent entities (users, schedules, candidates, availability entries,
//! comments) plus the availability enumeration and the input normalization
//! applied when a schedule is created.

pub mod availability;
pub mod comment;
pub mod schedule;
pub mod user;

pub use availability::*;
pub use comment::*;
pub use schedule::*;
pub use user::*;
