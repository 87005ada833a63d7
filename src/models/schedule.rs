//! Schedules and their candidate slots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{CandidateId, ScheduleId, UserId};

/// Maximum stored length of a schedule name, in characters.
pub const MAX_SCHEDULE_NAME_CHARS: usize = 255;

/// Maximum stored length of a schedule memo, in characters.
pub const MAX_MEMO_CHARS: usize = 500;

/// Name given to schedules created with an empty name.
pub const DEFAULT_SCHEDULE_NAME: &str = "(untitled)";

/// An event being scheduled, owned by the user who created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Unique schedule identifier.
    pub schedule_id: ScheduleId,
    /// Display name, never empty after normalization.
    pub schedule_name: String,
    /// Free-form description, may be empty.
    pub memo: String,
    /// User who created the schedule.
    pub created_by: UserId,
    /// Last time the schedule row itself was written.
    pub updated_at: DateTime<Utc>,
}

impl Schedule {
    pub fn new(
        schedule_id: ScheduleId,
        schedule_name: impl Into<String>,
        memo: impl Into<String>,
        created_by: UserId,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            schedule_id,
            schedule_name: schedule_name.into(),
            memo: memo.into(),
            created_by,
            updated_at,
        }
    }
}

/// A candidate date (or free-form slot) belonging to one schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Unique candidate identifier, assigned by the store.
    pub candidate_id: CandidateId,
    /// Display text, one line from the creation request.
    pub candidate_name: String,
    /// Schedule this candidate belongs to.
    pub schedule_id: ScheduleId,
}

impl Candidate {
    pub fn new(
        candidate_id: CandidateId,
        candidate_name: impl Into<String>,
        schedule_id: ScheduleId,
    ) -> Self {
        Self {
            candidate_id,
            candidate_name: candidate_name.into(),
            schedule_id,
        }
    }
}

fn truncate_chars(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}

/// Normalizes a requested schedule name: truncates to
/// [`MAX_SCHEDULE_NAME_CHARS`] and substitutes [`DEFAULT_SCHEDULE_NAME`]
/// when the result is empty. The name is not trimmed.
pub fn normalize_schedule_name(raw: &str) -> String {
    let truncated = truncate_chars(raw, MAX_SCHEDULE_NAME_CHARS);
    if truncated.is_empty() {
        DEFAULT_SCHEDULE_NAME.to_string()
    } else {
        truncated
    }
}

/// Truncates a requested memo to [`MAX_MEMO_CHARS`]. Empty memos stay empty.
pub fn normalize_memo(raw: &str) -> String {
    truncate_chars(raw, MAX_MEMO_CHARS)
}

/// Splits a newline-separated candidate block into candidate names.
///
/// Each line is trimmed and blank lines are dropped, so CRLF input and
/// stray surrounding whitespace produce the same candidates as clean
/// input. An all-blank block yields no candidates.
pub fn parse_candidate_names(raw: &str) -> Vec<String> {
    raw.trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
