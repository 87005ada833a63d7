//! Availability matrix assembly.
//!
//! This module turns one schedule's candidates and availability entries into
//! the user-by-candidate grid the detail page renders: one row per user, one
//! cell per candidate, with unanswered combinations filled in as unavailable.
//! The builder is a pure computation; fetching and ordering the inputs is the
//! caller's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::{CandidateId, UserId};
use crate::models::{Availability, AvailabilityEntry, Candidate, Viewer};

/// One cell of the matrix: a user's availability for one candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub candidate_id: CandidateId,
    pub availability: Availability,
}

/// One row of the matrix: a user and their cell per candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixRow {
    pub user_id: UserId,
    pub username: String,
    /// True on exactly the requesting user's row.
    pub is_self: bool,
    /// One cell per candidate, in candidate order.
    pub cells: Vec<MatrixCell>,
}

/// The assembled grid, rows in display order: the requesting user first,
/// then the remaining entry users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityMatrix {
    pub rows: Vec<MatrixRow>,
}

impl AvailabilityMatrix {
    /// Find a row by user id.
    pub fn row_for(&self, user_id: UserId) -> Option<&MatrixRow> {
        self.rows.iter().find(|row| row.user_id == user_id)
    }
}

/// Builds an [`AvailabilityMatrix`] from one schedule's data.
///
/// Inputs are taken as the store returns them: `candidates` ordered by id
/// ascending, `entries` ordered by username ascending then candidate id
/// ascending. The builder preserves those orders rather than re-sorting,
/// so rows come out viewer-first and then username-ascending.
///
/// Every distinct entry user becomes a row, even when their entries point
/// at candidates outside `candidates` (those rows read as all-unavailable).
/// The viewer always gets a row, answered or not.
pub struct AvailabilityMatrixBuilder<'a> {
    candidates: &'a [Candidate],
    entries: &'a [AvailabilityEntry],
    viewer: &'a Viewer,
}

impl<'a> AvailabilityMatrixBuilder<'a> {
    pub fn new(
        candidates: &'a [Candidate],
        entries: &'a [AvailabilityEntry],
        viewer: &'a Viewer,
    ) -> Self {
        Self {
            candidates,
            entries,
            viewer,
        }
    }

    /// Assemble the matrix. Pure: inputs are read once and left unchanged.
    pub fn build(self) -> AvailabilityMatrix {
        // Recorded values per user per candidate. A duplicate (user,
        // candidate) pair overwrites, so the last entry wins.
        let mut value_map: HashMap<UserId, HashMap<CandidateId, Availability>> = HashMap::new();
        for entry in self.entries {
            value_map
                .entry(entry.user_id)
                .or_default()
                .insert(entry.candidate_id, entry.availability);
        }

        // Row order: viewer first, then entry users by first appearance.
        // An entry re-seen for a known user refreshes the username but
        // keeps the earlier position, so the viewer's row stays in front
        // even when their own entries show up later.
        let mut order: Vec<UserId> = vec![self.viewer.user_id];
        let mut usernames: HashMap<UserId, String> = HashMap::new();
        usernames.insert(self.viewer.user_id, self.viewer.username.clone());
        for entry in self.entries {
            if !usernames.contains_key(&entry.user_id) {
                order.push(entry.user_id);
            }
            usernames.insert(entry.user_id, entry.username.clone());
        }

        let rows = order
            .into_iter()
            .map(|user_id| {
                let values = value_map.get(&user_id);
                let cells = self
                    .candidates
                    .iter()
                    .map(|candidate| MatrixCell {
                        candidate_id: candidate.candidate_id,
                        availability: values
                            .and_then(|by_candidate| by_candidate.get(&candidate.candidate_id))
                            .copied()
                            .unwrap_or_default(),
                    })
                    .collect();

                MatrixRow {
                    user_id,
                    username: usernames.remove(&user_id).unwrap_or_default(),
                    is_self: user_id == self.viewer.user_id,
                    cells,
                }
            })
            .collect();

        AvailabilityMatrix { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ScheduleId;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn schedule_id() -> ScheduleId {
        ScheduleId::new(Uuid::nil())
    }

    fn candidate(id: i64, name: &str) -> Candidate {
        Candidate::new(CandidateId::new(id), name, schedule_id())
    }

    fn entry(user_id: i64, username: &str, candidate_id: i64, value: u8) -> AvailabilityEntry {
        AvailabilityEntry::new(
            UserId::new(user_id),
            username,
            CandidateId::new(candidate_id),
            Availability::try_from(value).unwrap(),
        )
    }

    fn viewer(user_id: i64, username: &str) -> Viewer {
        Viewer::new(UserId::new(user_id), username)
    }

    #[test]
    fn test_single_answer_fills_remaining_cells() {
        let candidates = vec![candidate(1, "Mon"), candidate(2, "Tue")];
        let entries = vec![entry(10, "alice", 1, 2)];
        let me = viewer(10, "alice");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(matrix.rows.len(), 1);
        let row = &matrix.rows[0];
        assert!(row.is_self);
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.cells[0].availability, Availability::Available);
        assert_eq!(row.cells[1].availability, Availability::Unavailable);
    }

    #[test]
    fn test_viewer_without_entries_gets_a_row() {
        let candidates: Vec<Candidate> = Vec::new();
        let entries: Vec<AvailabilityEntry> = Vec::new();
        let me = viewer(5, "bob");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(matrix.rows.len(), 1);
        assert_eq!(matrix.rows[0].user_id, UserId::new(5));
        assert_eq!(matrix.rows[0].username, "bob");
        assert!(matrix.rows[0].is_self);
        assert!(matrix.rows[0].cells.is_empty());
    }

    #[test]
    fn test_two_users_one_candidate() {
        let candidates = vec![candidate(1, "Mon")];
        let entries = vec![entry(1, "ann", 1, 1), entry(2, "ben", 1, 2)];
        let me = viewer(1, "ann");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(matrix.rows.len(), 2);
        assert_eq!(matrix.rows[0].user_id, UserId::new(1));
        assert_eq!(matrix.rows[0].cells[0].availability, Availability::Maybe);
        assert!(matrix.rows[0].is_self);
        assert_eq!(matrix.rows[1].user_id, UserId::new(2));
        assert_eq!(matrix.rows[1].cells[0].availability, Availability::Available);
        assert!(!matrix.rows[1].is_self);
    }

    #[test]
    fn test_rows_follow_entry_order_after_viewer() {
        // Entries arrive username-ascending; the viewer is not among them.
        let candidates = vec![candidate(1, "Mon")];
        let entries = vec![
            entry(3, "carol", 1, 2),
            entry(1, "dave", 1, 1),
            entry(2, "erin", 1, 0),
        ];
        let me = viewer(9, "zoe");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        let order: Vec<UserId> = matrix.rows.iter().map(|r| r.user_id).collect();
        assert_eq!(
            order,
            vec![UserId::new(9), UserId::new(3), UserId::new(1), UserId::new(2)]
        );
        assert_eq!(matrix.rows[0].cells[0].availability, Availability::Unavailable);
    }

    #[test]
    fn test_viewer_entry_refreshes_username_but_keeps_front_slot() {
        let candidates = vec![candidate(1, "Mon")];
        let entries = vec![entry(1, "ann-renamed", 1, 2), entry(2, "ben", 1, 1)];
        let me = viewer(1, "ann");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(matrix.rows.len(), 2);
        assert_eq!(matrix.rows[0].user_id, UserId::new(1));
        assert_eq!(matrix.rows[0].username, "ann-renamed");
        assert!(matrix.rows[0].is_self);
        assert!(!matrix.rows[1].is_self);
    }

    #[test]
    fn test_duplicate_pair_last_entry_wins() {
        let candidates = vec![candidate(1, "Mon")];
        let entries = vec![entry(1, "ann", 1, 1), entry(1, "ann", 1, 2)];
        let me = viewer(1, "ann");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(matrix.rows[0].cells[0].availability, Availability::Available);
    }

    #[test]
    fn test_entry_for_unknown_candidate_still_surfaces_user() {
        // Candidate 99 is not part of the schedule's candidate list; the
        // user still gets a row, read as all-unavailable.
        let candidates = vec![candidate(1, "Mon")];
        let entries = vec![entry(2, "ben", 99, 2)];
        let me = viewer(1, "ann");

        let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(matrix.rows.len(), 2);
        let ben = matrix.row_for(UserId::new(2)).unwrap();
        assert_eq!(ben.cells.len(), 1);
        assert_eq!(ben.cells[0].availability, Availability::Unavailable);
    }

    #[test]
    fn test_identical_inputs_build_identical_matrices() {
        let candidates = vec![candidate(1, "Mon"), candidate(2, "Tue")];
        let entries = vec![entry(1, "ann", 1, 2), entry(2, "ben", 2, 1)];
        let me = viewer(1, "ann");

        let first = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();
        let second = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

        assert_eq!(first, second);
    }

    // Strategy: a pool of users answering a fixed candidate list, values in
    // range, usernames derived from the user id so they stay consistent.
    fn arb_entries() -> impl Strategy<Value = Vec<AvailabilityEntry>> {
        prop::collection::vec((1..6i64, 1..5i64, 0..3u8), 0..40).prop_map(|raw| {
            raw.into_iter()
                .map(|(user, cand, value)| entry(user, &format!("user{}", user), cand, value))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_every_row_covers_every_candidate(entries in arb_entries(), viewer_id in 1..8i64) {
            let candidates: Vec<Candidate> =
                (1..5).map(|id| candidate(id, "slot")).collect();
            let me = viewer(viewer_id, &format!("user{}", viewer_id));

            let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

            for row in &matrix.rows {
                prop_assert_eq!(row.cells.len(), candidates.len());
                for (cell, candidate) in row.cells.iter().zip(&candidates) {
                    prop_assert_eq!(cell.candidate_id, candidate.candidate_id);
                }
            }
        }

        #[test]
        fn prop_row_count_is_viewer_plus_distinct_users(entries in arb_entries(), viewer_id in 1..8i64) {
            let candidates: Vec<Candidate> =
                (1..5).map(|id| candidate(id, "slot")).collect();
            let me = viewer(viewer_id, &format!("user{}", viewer_id));

            let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

            let mut distinct: std::collections::HashSet<UserId> =
                entries.iter().map(|e| e.user_id).collect();
            distinct.insert(me.user_id);
            prop_assert_eq!(matrix.rows.len(), distinct.len());
        }

        #[test]
        fn prop_exactly_one_self_row_and_it_is_first(entries in arb_entries(), viewer_id in 1..8i64) {
            let candidates: Vec<Candidate> =
                (1..5).map(|id| candidate(id, "slot")).collect();
            let me = viewer(viewer_id, &format!("user{}", viewer_id));

            let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

            prop_assert_eq!(matrix.rows.iter().filter(|r| r.is_self).count(), 1);
            prop_assert!(matrix.rows[0].is_self);
            prop_assert_eq!(matrix.rows[0].user_id, me.user_id);
        }

        #[test]
        fn prop_cells_match_last_recorded_value(entries in arb_entries(), viewer_id in 1..8i64) {
            let candidates: Vec<Candidate> =
                (1..5).map(|id| candidate(id, "slot")).collect();
            let me = viewer(viewer_id, &format!("user{}", viewer_id));

            let matrix = AvailabilityMatrixBuilder::new(&candidates, &entries, &me).build();

            for row in &matrix.rows {
                for cell in &row.cells {
                    let expected = entries
                        .iter()
                        .filter(|e| e.user_id == row.user_id && e.candidate_id == cell.candidate_id)
                        .next_back()
                        .map(|e| e.availability)
                        .unwrap_or_default();
                    prop_assert_eq!(cell.availability, expected);
                }
            }
        }
    }
}
