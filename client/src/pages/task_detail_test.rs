use super::*;
use crate::net::types::{Photo, ReferenceImage, TaskStatus};

fn task(status: TaskStatus) -> Task {
    Task {
        id: "t-1".to_owned(),
        title: "Plant hedge".to_owned(),
        description: None,
        site_id: "s-1".to_owned(),
        section_id: None,
        client_id: "c-1".to_owned(),
        worker_id: Some("w-1".to_owned()),
        status,
        scheduled_for: None,
        reference_images: vec![ReferenceImage {
            id: "r-1".to_owned(),
            url: "/m/r-1.jpg".to_owned(),
            label: Some("Hedge".to_owned()),
            quantity: 2,
        }],
        before_photos: Vec::new(),
        after_photos: Vec::new(),
        has_feedback: false,
    }
}

fn photo(id: &str) -> Photo {
    Photo { id: id.to_owned(), url: format!("/m/{id}.jpg") }
}

#[test]
fn completing_is_blocked_until_after_slots_fill() {
    let mut current = task(TaskStatus::InProgress);
    current.after_photos = vec![photo("a")];
    let states = action_states(&current, Role::Worker);
    assert_eq!(states.len(), 1);
    assert_eq!(states[0].action, TaskAction::Complete);
    assert_eq!(states[0].blocker.as_deref(), Some("Upload 1 more after photo."));

    current.after_photos.push(photo("b"));
    assert_eq!(action_states(&current, Role::Worker)[0].blocker, None);
}

#[test]
fn clients_get_no_status_actions() {
    assert!(action_states(&task(TaskStatus::Completed), Role::Client).is_empty());
}

#[test]
fn admin_sees_verify_reopen_and_cancel_on_completed_task() {
    let actions: Vec<TaskAction> =
        action_states(&task(TaskStatus::Completed), Role::Admin).into_iter().map(|s| s.action).collect();
    assert_eq!(actions, vec![TaskAction::Verify, TaskAction::Reopen, TaskAction::Cancel]);
}

#[test]
fn feedback_input_validates_rating_and_trims_comment() {
    assert_eq!(feedback_input("4", "  lovely work "), Ok((4, Some("lovely work".to_owned()))));
    assert_eq!(feedback_input("4", "  "), Ok((4, None)));
    assert_eq!(feedback_input("9", ""), Err("Choose a rating from 1 to 5."));
}
