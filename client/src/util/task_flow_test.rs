use super::*;
use crate::net::types::{Photo, ReferenceImage};

fn task(status: TaskStatus) -> Task {
    Task {
        id: "t-1".to_owned(),
        title: "Plant roses".to_owned(),
        description: None,
        site_id: "s-1".to_owned(),
        section_id: None,
        client_id: "c-1".to_owned(),
        worker_id: Some("w-1".to_owned()),
        status,
        scheduled_for: None,
        reference_images: Vec::new(),
        before_photos: Vec::new(),
        after_photos: Vec::new(),
        has_feedback: false,
    }
}

fn dated(title: &str, status: TaskStatus, date: Option<&str>) -> Task {
    Task { title: title.to_owned(), scheduled_for: date.map(str::to_owned), ..task(status) }
}

fn photo(id: &str) -> Photo {
    Photo { id: id.to_owned(), url: format!("/media/{id}.jpg") }
}

// =============================================================
// transitions
// =============================================================

fn reference(id: &str, quantity: i64) -> ReferenceImage {
    ReferenceImage { id: id.to_owned(), url: format!("/media/{id}.jpg"), label: None, quantity }
}

#[test]
fn worker_starts_assigned_work() {
    assert!(can_transition(&task(TaskStatus::Assigned), Role::Worker, TaskStatus::InProgress));
    assert!(!can_transition(&task(TaskStatus::Assigned), Role::Worker, TaskStatus::Cancelled));
    assert!(!can_transition(&task(TaskStatus::Completed), Role::Worker, TaskStatus::Verified));
}

#[test]
fn worker_cannot_complete_with_missing_after_photos() {
    let mut work = task(TaskStatus::InProgress);
    work.reference_images = vec![reference("r-1", 2), reference("r-2", 1)];
    work.after_photos = vec![photo("a-1"), photo("a-2")];
    assert!(!can_transition(&work, Role::Worker, TaskStatus::Completed));

    work.after_photos.push(photo("a-3"));
    assert!(can_transition(&work, Role::Worker, TaskStatus::Completed));
}

#[test]
fn worker_cannot_complete_without_any_after_photo() {
    let mut work = task(TaskStatus::InProgress);
    assert!(!can_transition(&work, Role::Worker, TaskStatus::Completed));

    work.after_photos.push(photo("a-1"));
    assert!(can_transition(&work, Role::Worker, TaskStatus::Completed));
}

#[test]
fn admin_verifies_reopens_and_cancels() {
    let done = task(TaskStatus::Completed);
    assert!(can_transition(&done, Role::Admin, TaskStatus::Verified));
    assert!(can_transition(&done, Role::Admin, TaskStatus::InProgress));
    assert!(can_transition(&task(TaskStatus::Pending), Role::Admin, TaskStatus::Cancelled));
    assert!(!can_transition(&task(TaskStatus::Assigned), Role::Admin, TaskStatus::InProgress));
}

#[test]
fn pending_to_assigned_is_never_a_status_change() {
    for role in [Role::Admin, Role::Worker, Role::Client] {
        assert!(!can_transition(&task(TaskStatus::Pending), role, TaskStatus::Assigned));
    }
}

#[test]
fn final_statuses_have_no_actions() {
    for status in [TaskStatus::Verified, TaskStatus::Cancelled] {
        assert!(is_final(status));
        for role in [Role::Admin, Role::Worker, Role::Client] {
            assert!(available_actions(&task(status), role).is_empty());
        }
    }
}

#[test]
fn clients_never_get_actions() {
    for status in TaskStatus::ALL {
        assert!(available_actions(&task(status), Role::Client).is_empty());
    }
}

#[test]
fn admin_actions_on_completed_task() {
    assert_eq!(
        available_actions(&task(TaskStatus::Completed), Role::Admin),
        vec![TaskAction::Verify, TaskAction::Reopen, TaskAction::Cancel]
    );
}

#[test]
fn open_statuses() {
    assert!(is_open(TaskStatus::Pending));
    assert!(is_open(TaskStatus::InProgress));
    assert!(!is_open(TaskStatus::Completed));
}

// =============================================================
// completion blocker
// =============================================================

#[test]
fn complete_without_references_needs_one_after_photo() {
    let mut t = task(TaskStatus::InProgress);
    assert_eq!(action_blocker(&t, TaskAction::Complete), Some("Upload at least one after photo.".to_owned()));
    t.after_photos.push(photo("a1"));
    assert_eq!(action_blocker(&t, TaskAction::Complete), None);
}

#[test]
fn complete_counts_missing_slot_photos() {
    let mut t = task(TaskStatus::InProgress);
    t.reference_images = vec![ReferenceImage { id: "r1".to_owned(), url: "/r1.jpg".to_owned(), label: None, quantity: 3 }];
    t.after_photos = vec![photo("a1")];
    assert_eq!(action_blocker(&t, TaskAction::Complete), Some("Upload 2 more after photos.".to_owned()));
    t.after_photos.push(photo("a2"));
    assert_eq!(action_blocker(&t, TaskAction::Complete), Some("Upload 1 more after photo.".to_owned()));
    t.after_photos.push(photo("a3"));
    assert_eq!(action_blocker(&t, TaskAction::Complete), None);
}

#[test]
fn other_actions_are_never_blocked() {
    assert_eq!(action_blocker(&task(TaskStatus::Assigned), TaskAction::Start), None);
}

// =============================================================
// assignment, photos, feedback
// =============================================================

#[test]
fn admin_assigns_until_work_starts() {
    assert!(can_assign(Role::Admin, TaskStatus::Pending));
    assert!(can_assign(Role::Admin, TaskStatus::Assigned));
    assert!(!can_assign(Role::Admin, TaskStatus::InProgress));
    assert!(!can_assign(Role::Worker, TaskStatus::Pending));
}

#[test]
fn photo_upload_windows() {
    assert!(can_upload_photos(Role::Worker, TaskStatus::Assigned, PhotoKind::Before));
    assert!(!can_upload_photos(Role::Worker, TaskStatus::Assigned, PhotoKind::After));
    assert!(can_upload_photos(Role::Worker, TaskStatus::InProgress, PhotoKind::After));
    assert!(!can_upload_photos(Role::Admin, TaskStatus::InProgress, PhotoKind::After));
}

#[test]
fn feedback_only_once_for_finished_tasks() {
    assert!(can_leave_feedback(&task(TaskStatus::Completed), Role::Client));
    assert!(can_leave_feedback(&task(TaskStatus::Verified), Role::Client));
    assert!(!can_leave_feedback(&task(TaskStatus::InProgress), Role::Client));
    assert!(!can_leave_feedback(&task(TaskStatus::Completed), Role::Admin));
    let rated = Task { has_feedback: true, ..task(TaskStatus::Completed) };
    assert!(!can_leave_feedback(&rated, Role::Client));
}

// =============================================================
// worker board + progress
// =============================================================

#[test]
fn worker_board_buckets_and_sorts() {
    let tasks = vec![
        dated("b", TaskStatus::Assigned, Some("2026-06-02")),
        dated("a", TaskStatus::Assigned, None),
        dated("c", TaskStatus::Assigned, Some("2026-06-01")),
        dated("d", TaskStatus::InProgress, None),
        dated("e", TaskStatus::Verified, None),
        dated("f", TaskStatus::Cancelled, None),
    ];
    let board = worker_board(&tasks);
    let titles: Vec<&str> = board.to_start.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["c", "b", "a"]);
    assert_eq!(board.in_progress.len(), 1);
    assert_eq!(board.done.len(), 1);
}

#[test]
fn completion_percent_ignores_cancelled() {
    let tasks = vec![
        task(TaskStatus::Completed),
        task(TaskStatus::InProgress),
        task(TaskStatus::Cancelled),
        task(TaskStatus::Verified),
        task(TaskStatus::Pending),
    ];
    assert_eq!(completion_percent(&tasks), 50);
    assert_eq!(completion_percent(&[]), 0);
}
