//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and single-process deployments. All data is
//! stored in memory using HashMap structures, providing fast, deterministic,
//! and isolated execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::api::{CandidateId, ScheduleId, UserId};
use crate::db::repository::*;
use crate::models::{Availability, AvailabilityEntry, Candidate, Comment, Schedule, User};

/// In-memory local repository.
///
/// This implementation stores all data in memory using HashMaps, making it
/// ideal for unit tests and local deployments that need isolation and speed.
/// The ordering contracts of the repository traits are honored by sorting
/// at query time.
///
/// # Example
/// ```
/// use rsvp_rust::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert_eq!(repo.schedule_count(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct StoredAvailability {
    schedule_id: ScheduleId,
    availability: Availability,
}

struct LocalData {
    users: HashMap<UserId, User>,
    schedules: HashMap<ScheduleId, Schedule>,
    candidates: HashMap<CandidateId, Candidate>,

    // Keyed by (candidate, user): at most one entry per pair.
    availabilities: HashMap<(CandidateId, UserId), StoredAvailability>,

    // Keyed by (schedule, user): at most one comment per pair.
    comments: HashMap<(ScheduleId, UserId), String>,

    // ID counter
    next_candidate_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            schedules: HashMap::new(),
            candidates: HashMap::new(),
            availabilities: HashMap::new(),
            comments: HashMap::new(),
            next_candidate_id: 1,
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        let mut data = self.data.write().unwrap();
        data.is_healthy = healthy;
    }

    /// Clear all data from the repository, keeping the health flag.
    pub fn clear(&self) {
        let mut data = self.data.write().unwrap();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of schedules stored.
    pub fn schedule_count(&self) -> usize {
        self.data.read().unwrap().schedules.len()
    }

    /// Check if a schedule exists.
    pub fn has_schedule(&self, schedule_id: ScheduleId) -> bool {
        self.data
            .read()
            .unwrap()
            .schedules
            .contains_key(&schedule_id)
    }

    /// Helper to check health and return error if unhealthy.
    fn check_health(&self) -> RepositoryResult<()> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(RepositoryError::ConnectionError(
                "Store is not healthy".to_string(),
            ));
        }
        Ok(())
    }

    /// Helper to get a schedule or return NotFound error.
    fn get_schedule_impl(&self, schedule_id: ScheduleId) -> RepositoryResult<Schedule> {
        let data = self.data.read().unwrap();
        data.schedules
            .get(&schedule_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Schedule {} not found", schedule_id)))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

// ==================== User Repository ====================

#[async_trait]
impl UserRepository for LocalRepository {
    async fn upsert_user(&self, user: &User) -> RepositoryResult<()> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        data.users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn get_user(&self, user_id: UserId) -> RepositoryResult<User> {
        let data = self.data.read().unwrap();
        data.users
            .get(&user_id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("User {} not found", user_id)))
    }
}

// ==================== Schedule Repository ====================

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        let data = self.data.read().unwrap();
        Ok(data.is_healthy)
    }

    async fn store_schedule(&self, schedule: &Schedule) -> RepositoryResult<()> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        data.schedules.insert(schedule.schedule_id, schedule.clone());
        Ok(())
    }

    async fn get_schedule(&self, schedule_id: ScheduleId) -> RepositoryResult<Schedule> {
        self.get_schedule_impl(schedule_id)
    }

    async fn list_schedules_for_user(&self, created_by: UserId) -> RepositoryResult<Vec<Schedule>> {
        let data = self.data.read().unwrap();

        let mut schedules: Vec<Schedule> = data
            .schedules
            .values()
            .filter(|s| s.created_by == created_by)
            .cloned()
            .collect();

        // Newest first; ties broken by id for a deterministic listing.
        schedules.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.schedule_id.cmp(&b.schedule_id))
        });
        Ok(schedules)
    }
}

// ==================== Candidate Repository ====================

#[async_trait]
impl CandidateRepository for LocalRepository {
    async fn add_candidates(
        &self,
        schedule_id: ScheduleId,
        candidate_names: &[String],
    ) -> RepositoryResult<Vec<Candidate>> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        let mut stored = Vec::with_capacity(candidate_names.len());
        for name in candidate_names {
            let candidate_id = CandidateId::new(data.next_candidate_id);
            data.next_candidate_id += 1;

            let candidate = Candidate::new(candidate_id, name.clone(), schedule_id);
            data.candidates.insert(candidate_id, candidate.clone());
            stored.push(candidate);
        }
        Ok(stored)
    }

    async fn get_candidates(&self, schedule_id: ScheduleId) -> RepositoryResult<Vec<Candidate>> {
        let data = self.data.read().unwrap();

        let mut candidates: Vec<Candidate> = data
            .candidates
            .values()
            .filter(|c| c.schedule_id == schedule_id)
            .cloned()
            .collect();

        candidates.sort_by_key(|c| c.candidate_id);
        Ok(candidates)
    }

    async fn get_candidate(&self, candidate_id: CandidateId) -> RepositoryResult<Candidate> {
        let data = self.data.read().unwrap();
        data.candidates
            .get(&candidate_id)
            .cloned()
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Candidate {} not found", candidate_id))
            })
    }
}

// ==================== Availability Repository ====================

#[async_trait]
impl AvailabilityRepository for LocalRepository {
    async fn upsert_availability(
        &self,
        schedule_id: ScheduleId,
        user_id: UserId,
        candidate_id: CandidateId,
        availability: Availability,
    ) -> RepositoryResult<()> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        data.availabilities.insert(
            (candidate_id, user_id),
            StoredAvailability {
                schedule_id,
                availability,
            },
        );
        Ok(())
    }

    async fn fetch_availabilities(
        &self,
        schedule_id: ScheduleId,
    ) -> RepositoryResult<Vec<AvailabilityEntry>> {
        let data = self.data.read().unwrap();

        let mut entries = Vec::new();
        for (&(candidate_id, user_id), stored) in &data.availabilities {
            if stored.schedule_id != schedule_id {
                continue;
            }

            // Join the owner's current username.
            let user = data.users.get(&user_id).ok_or_else(|| {
                RepositoryError::InternalError(format!(
                    "Availability entry references unknown user {}",
                    user_id
                ))
            })?;

            entries.push(AvailabilityEntry::new(
                user_id,
                user.username.clone(),
                candidate_id,
                stored.availability,
            ));
        }

        entries.sort_by(|a, b| {
            a.username
                .cmp(&b.username)
                .then_with(|| a.candidate_id.cmp(&b.candidate_id))
        });
        Ok(entries)
    }
}

// ==================== Comment Repository ====================

#[async_trait]
impl CommentRepository for LocalRepository {
    async fn upsert_comment(&self, comment: &Comment) -> RepositoryResult<()> {
        self.check_health()?;

        let mut data = self.data.write().unwrap();
        data.comments.insert(
            (comment.schedule_id, comment.user_id),
            comment.comment.clone(),
        );
        Ok(())
    }

    async fn fetch_comments(&self, schedule_id: ScheduleId) -> RepositoryResult<Vec<Comment>> {
        let data = self.data.read().unwrap();

        let mut comments: Vec<Comment> = data
            .comments
            .iter()
            .filter(|((sid, _), _)| *sid == schedule_id)
            .map(|(&(sid, uid), text)| Comment::new(sid, uid, text.clone()))
            .collect();

        comments.sort_by_key(|c| c.user_id);
        Ok(comments)
    }
}
