use rsvp_rust::api::{Availability, CandidateId, ScheduleId, UserId, Viewer};
use rsvp_rust::db::repositories::LocalRepository;
use rsvp_rust::db::services::{
    create_schedule, get_schedule_detail, health_check, list_schedules, login_user,
    update_availability, update_comment,
};
use uuid::Uuid;

async fn login(repo: &LocalRepository, id: i64, name: &str) -> Viewer {
    let user = login_user(repo, UserId::new(id), name).await.unwrap();
    Viewer::from(user)
}

#[tokio::test]
async fn test_health_check() {
    let repo = LocalRepository::new();
    let result = health_check(&repo).await;

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_login_create_and_list() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let (schedule, candidates) =
        create_schedule(&repo, &alice, "Team offsite", "bring laptops", "Mon\nTue\nWed")
            .await
            .unwrap();

    assert_eq!(schedule.schedule_name, "Team offsite");
    assert_eq!(schedule.memo, "bring laptops");
    assert_eq!(schedule.created_by, alice.user_id);
    assert_eq!(candidates.len(), 3);
    assert_eq!(candidates[0].candidate_name, "Mon");
    assert_eq!(candidates[2].candidate_name, "Wed");

    let schedules = list_schedules(&repo, alice.user_id).await.unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].schedule_id, schedule.schedule_id);
}

#[tokio::test]
async fn test_list_shows_only_own_schedules() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;
    let bob = login(&repo, 2, "bob").await;

    create_schedule(&repo, &alice, "Alice's party", "", "Fri")
        .await
        .unwrap();
    create_schedule(&repo, &bob, "Bob's dinner", "", "Sat")
        .await
        .unwrap();

    let schedules = list_schedules(&repo, alice.user_id).await.unwrap();
    assert_eq!(schedules.len(), 1);
    assert_eq!(schedules[0].schedule_name, "Alice's party");
}

#[tokio::test]
async fn test_create_schedule_normalizes_inputs() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let long_name = "x".repeat(300);
    let (schedule, candidates) =
        create_schedule(&repo, &alice, &long_name, "", "  Mon  \n\n   \nTue\n")
            .await
            .unwrap();

    assert_eq!(schedule.schedule_name.chars().count(), 255);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].candidate_name, "Mon");
    assert_eq!(candidates[1].candidate_name, "Tue");

    let (untitled, _) = create_schedule(&repo, &alice, "", "", "").await.unwrap();
    assert_eq!(untitled.schedule_name, "(untitled)");
}

#[tokio::test]
async fn test_detail_matrix_end_to_end() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;
    let bob = login(&repo, 2, "bob").await;

    let (schedule, candidates) =
        create_schedule(&repo, &alice, "Game night", "", "Fri\nSat\nSun")
            .await
            .unwrap();

    // Bob answers two of the three candidates; Alice answers one.
    update_availability(
        &repo,
        schedule.schedule_id,
        bob.user_id,
        candidates[0].candidate_id,
        Availability::Available,
    )
    .await
    .unwrap();
    update_availability(
        &repo,
        schedule.schedule_id,
        bob.user_id,
        candidates[2].candidate_id,
        Availability::Maybe,
    )
    .await
    .unwrap();
    update_availability(
        &repo,
        schedule.schedule_id,
        alice.user_id,
        candidates[1].candidate_id,
        Availability::Available,
    )
    .await
    .unwrap();

    let detail = get_schedule_detail(&repo, schedule.schedule_id, &alice)
        .await
        .unwrap();

    assert_eq!(detail.schedule.schedule_id, schedule.schedule_id);
    assert_eq!(detail.candidates.len(), 3);

    // Viewer row first, marked as self, then the other respondent.
    assert_eq!(detail.matrix.rows.len(), 2);
    assert!(detail.matrix.rows[0].is_self);
    assert_eq!(detail.matrix.rows[0].user_id, alice.user_id);
    assert_eq!(detail.matrix.rows[1].user_id, bob.user_id);
    assert!(!detail.matrix.rows[1].is_self);

    // Every row covers every candidate in candidate order.
    for row in &detail.matrix.rows {
        assert_eq!(row.cells.len(), 3);
        for (cell, candidate) in row.cells.iter().zip(&detail.candidates) {
            assert_eq!(cell.candidate_id, candidate.candidate_id);
        }
    }

    let alice_row = &detail.matrix.rows[0];
    assert_eq!(alice_row.cells[0].availability, Availability::Unavailable);
    assert_eq!(alice_row.cells[1].availability, Availability::Available);
    assert_eq!(alice_row.cells[2].availability, Availability::Unavailable);

    let bob_row = &detail.matrix.rows[1];
    assert_eq!(bob_row.cells[0].availability, Availability::Available);
    assert_eq!(bob_row.cells[1].availability, Availability::Unavailable);
    assert_eq!(bob_row.cells[2].availability, Availability::Maybe);
}

#[tokio::test]
async fn test_detail_for_viewer_without_entries() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;
    let carol = login(&repo, 3, "carol").await;

    let (schedule, _) = create_schedule(&repo, &alice, "Standup", "", "Mon\nTue")
        .await
        .unwrap();

    // Carol never answered anything; her view still shows her own row.
    let detail = get_schedule_detail(&repo, schedule.schedule_id, &carol)
        .await
        .unwrap();

    assert_eq!(detail.matrix.rows.len(), 1);
    let row = &detail.matrix.rows[0];
    assert_eq!(row.user_id, carol.user_id);
    assert_eq!(row.username, "carol");
    assert!(row.is_self);
    assert!(row
        .cells
        .iter()
        .all(|c| c.availability == Availability::Unavailable));
}

#[tokio::test]
async fn test_availability_upsert_reflected_in_matrix() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let (schedule, candidates) = create_schedule(&repo, &alice, "Lunch", "", "Thu")
        .await
        .unwrap();
    let candidate_id = candidates[0].candidate_id;

    update_availability(
        &repo,
        schedule.schedule_id,
        alice.user_id,
        candidate_id,
        Availability::Maybe,
    )
    .await
    .unwrap();
    update_availability(
        &repo,
        schedule.schedule_id,
        alice.user_id,
        candidate_id,
        Availability::Unavailable,
    )
    .await
    .unwrap();

    let detail = get_schedule_detail(&repo, schedule.schedule_id, &alice)
        .await
        .unwrap();
    assert_eq!(
        detail.matrix.rows[0].cells[0].availability,
        Availability::Unavailable
    );
}

#[tokio::test]
async fn test_comment_flow() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;
    let bob = login(&repo, 2, "bob").await;

    let (schedule, _) = create_schedule(&repo, &alice, "Picnic", "", "Sun")
        .await
        .unwrap();

    update_comment(&repo, schedule.schedule_id, bob.user_id, "count me in")
        .await
        .unwrap();
    update_comment(&repo, schedule.schedule_id, alice.user_id, "bringing snacks")
        .await
        .unwrap();

    // A second comment from the same user replaces the first.
    let stored = update_comment(&repo, schedule.schedule_id, bob.user_id, "actually late")
        .await
        .unwrap();
    assert_eq!(stored, "actually late");

    let detail = get_schedule_detail(&repo, schedule.schedule_id, &alice)
        .await
        .unwrap();
    assert_eq!(detail.comments.len(), 2);
    assert_eq!(detail.comments[0].user_id, alice.user_id);
    assert_eq!(detail.comments[0].comment, "bringing snacks");
    assert_eq!(detail.comments[1].user_id, bob.user_id);
    assert_eq!(detail.comments[1].comment, "actually late");
}

#[tokio::test]
async fn test_comment_truncated_to_limit() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let (schedule, _) = create_schedule(&repo, &alice, "AGM", "", "Mon")
        .await
        .unwrap();

    let long_comment = "y".repeat(400);
    let stored = update_comment(&repo, schedule.schedule_id, alice.user_id, &long_comment)
        .await
        .unwrap();

    assert_eq!(stored.chars().count(), 255);
}

#[tokio::test]
async fn test_detail_unknown_schedule() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let result = get_schedule_detail(&repo, ScheduleId::new(Uuid::new_v4()), &alice).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_availability_rejects_candidate_of_other_schedule() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let (first, first_candidates) = create_schedule(&repo, &alice, "First", "", "Mon")
        .await
        .unwrap();
    let (second, _) = create_schedule(&repo, &alice, "Second", "", "Tue")
        .await
        .unwrap();

    let result = update_availability(
        &repo,
        second.schedule_id,
        alice.user_id,
        first_candidates[0].candidate_id,
        Availability::Available,
    )
    .await;
    assert!(result.is_err());

    // The valid combination still works.
    let result = update_availability(
        &repo,
        first.schedule_id,
        alice.user_id,
        first_candidates[0].candidate_id,
        Availability::Available,
    )
    .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_availability_requires_known_user() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let (schedule, candidates) = create_schedule(&repo, &alice, "Demo", "", "Mon")
        .await
        .unwrap();

    let result = update_availability(
        &repo,
        schedule.schedule_id,
        UserId::new(999),
        candidates[0].candidate_id,
        Availability::Available,
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_unknown_candidate_id_is_rejected() {
    let repo = LocalRepository::new();
    let alice = login(&repo, 1, "alice").await;

    let (schedule, _) = create_schedule(&repo, &alice, "Demo", "", "Mon")
        .await
        .unwrap();

    let result = update_availability(
        &repo,
        schedule.schedule_id,
        alice.user_id,
        CandidateId::new(12345),
        Availability::Maybe,
    )
    .await;
    assert!(result.is_err());
}
