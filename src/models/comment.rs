//! Per-user comments on a schedule.

use serde::{Deserialize, Serialize};

use crate::api::{ScheduleId, UserId};

/// Maximum stored length of a comment, in characters.
pub const MAX_COMMENT_CHARS: usize = 255;

/// One user's comment on one schedule. A later comment from the same user
/// replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub schedule_id: ScheduleId,
    pub user_id: UserId,
    pub comment: String,
}

impl Comment {
    pub fn new(schedule_id: ScheduleId, user_id: UserId, comment: impl Into<String>) -> Self {
        Self {
            schedule_id,
            user_id,
            comment: comment.into(),
        }
    }
}

/// Truncates a submitted comment to [`MAX_COMMENT_CHARS`].
pub fn normalize_comment(raw: &str) -> String {
    raw.chars().take(MAX_COMMENT_CHARS).collect()
}
