use super::*;
use crate::net::types::{Section, Session, User};

fn signed_in(role: Role) -> AuthState {
    AuthState::signed_in(Session {
        token: "t".to_owned(),
        user: User {
            id: "u-1".to_owned(),
            name: "Sam".to_owned(),
            email: "sam@verdant.io".to_owned(),
            role,
            phone: None,
        },
    })
}

fn reference(id: &str, quantity: &str) -> ReferenceRow {
    ReferenceRow {
        media: MediaAsset { id: id.to_owned(), url: format!("/media/{id}.jpg") },
        label: String::new(),
        quantity: quantity.to_owned(),
    }
}

#[test]
fn scoped_filter_narrows_by_role() {
    let worker = scoped_filter(&signed_in(Role::Worker), None);
    assert_eq!(worker.worker_id.as_deref(), Some("u-1"));
    assert_eq!(worker.client_id, None);

    let client = scoped_filter(&signed_in(Role::Client), Some(TaskStatus::Completed));
    assert_eq!(client.client_id.as_deref(), Some("u-1"));
    assert_eq!(client.status, Some(TaskStatus::Completed));

    let admin = scoped_filter(&signed_in(Role::Admin), None);
    assert_eq!(admin, TaskFilter::default());
}

#[test]
fn new_reference_row_defaults_to_one() {
    let row = ReferenceRow::from(MediaAsset { id: "m-1".to_owned(), url: "/m".to_owned() });
    assert_eq!(row.quantity, "1");
}

#[test]
fn reference_drafts_reject_zero_quantity() {
    let rows = vec![reference("m-1", "2"), reference("m-2", "0")];
    assert_eq!(reference_drafts(&rows), Err("Quantity for reference 2 must be at least 1.".to_owned()));
}

#[test]
fn reference_drafts_carry_media_ids_and_labels() {
    let mut row = reference("m-1", " 3 ");
    row.label = " Rose bed ".to_owned();
    let drafts = reference_drafts(&[row]).unwrap();
    assert_eq!(drafts[0].media_id, "m-1");
    assert_eq!(drafts[0].quantity, 3);
    assert_eq!(drafts[0].label.as_deref(), Some("Rose bed"));
}

#[test]
fn task_input_requires_title_and_site() {
    let missing_title = TaskInput { site_id: "s-1".to_owned(), ..TaskInput::default() };
    assert_eq!(missing_title.to_draft(), Err("Title is required.".to_owned()));
    let missing_site = TaskInput { title: "Prune".to_owned(), ..TaskInput::default() };
    assert_eq!(missing_site.to_draft(), Err("Choose a site.".to_owned()));
}

#[test]
fn task_input_blank_selects_become_none() {
    let input = TaskInput { title: "Prune".to_owned(), site_id: "s-1".to_owned(), ..TaskInput::default() };
    let draft = input.to_draft().unwrap();
    assert_eq!(draft.section_id, None);
    assert_eq!(draft.worker_id, None);
    assert!(draft.reference_images.is_empty());
}

#[test]
fn section_options_follow_selected_site() {
    let sites = vec![Site {
        id: "s-1".to_owned(),
        client_id: "c-1".to_owned(),
        name: "Villa".to_owned(),
        address: "1 Way".to_owned(),
        notes: None,
        sections: vec![Section {
            id: "sec-1".to_owned(),
            site_id: "s-1".to_owned(),
            name: "Lawn".to_owned(),
            area_sqm: None,
            notes: None,
        }],
    }];
    assert_eq!(section_options(&sites, "s-1"), vec![("sec-1".to_owned(), "Lawn".to_owned())]);
    assert!(section_options(&sites, "s-2").is_empty());
}

#[test]
fn worker_label_handles_unassigned_and_unknown() {
    assert_eq!(worker_label(&[], None), "Unassigned");
    assert_eq!(worker_label(&[], Some("w-9")), "w-9");
}
