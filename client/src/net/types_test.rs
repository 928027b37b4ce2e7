use super::*;

// =============================================================
// Role + TaskStatus serde
// =============================================================

#[test]
fn role_uses_lowercase_wire_names() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("admin"));
    let role: Role = serde_json::from_value(serde_json::json!("worker")).unwrap();
    assert_eq!(role, Role::Worker);
}

#[test]
fn task_status_in_progress_is_snake_case() {
    assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), serde_json::json!("in_progress"));
}

#[test]
fn task_status_parse_matches_as_str() {
    for status in TaskStatus::ALL {
        assert_eq!(TaskStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(TaskStatus::parse("archived"), None);
}

// =============================================================
// Task decoding
// =============================================================

#[test]
fn task_defaults_missing_collections() {
    let task: Task = serde_json::from_value(serde_json::json!({
        "id": "t-1",
        "title": "Mow front lawn",
        "site_id": "s-1",
        "client_id": "c-1"
    }))
    .unwrap();
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.reference_images.is_empty());
    assert!(task.before_photos.is_empty());
    assert!(task.after_photos.is_empty());
    assert!(!task.has_feedback);
    assert_eq!(task.worker_id, None);
}

#[test]
fn reference_image_quantity_accepts_integral_float() {
    let image: ReferenceImage =
        serde_json::from_value(serde_json::json!({ "id": "r-1", "url": "/m/r-1.jpg", "quantity": 3.0 })).unwrap();
    assert_eq!(image.quantity, 3);
}

#[test]
fn reference_image_quantity_defaults_to_one() {
    let image: ReferenceImage = serde_json::from_value(serde_json::json!({ "id": "r-1", "url": "/m/r-1.jpg" })).unwrap();
    assert_eq!(image.quantity, 1);
}

#[test]
fn reference_image_rejects_fractional_quantity() {
    let result: Result<ReferenceImage, _> =
        serde_json::from_value(serde_json::json!({ "id": "r-1", "url": "/m/r-1.jpg", "quantity": 2.5 }));
    assert!(result.is_err());
}

// =============================================================
// Inventory decoding
// =============================================================

#[test]
fn inventory_item_max_threshold_null_is_none() {
    let item: InventoryItem = serde_json::from_value(serde_json::json!({
        "id": "i-1",
        "name": "Mulch",
        "unit": "bag",
        "quantity": 12,
        "min_threshold": 5,
        "max_threshold": null
    }))
    .unwrap();
    assert_eq!(item.max_threshold, None);
}

#[test]
fn inventory_item_max_threshold_missing_is_none() {
    let item: InventoryItem = serde_json::from_value(serde_json::json!({
        "id": "i-1",
        "name": "Mulch",
        "unit": "bag",
        "quantity": 12.0,
        "min_threshold": 5
    }))
    .unwrap();
    assert_eq!(item.quantity, 12);
    assert_eq!(item.max_threshold, None);
}

#[test]
fn inventory_item_max_threshold_parses_number() {
    let item: InventoryItem = serde_json::from_value(serde_json::json!({
        "id": "i-1",
        "name": "Mulch",
        "unit": "bag",
        "quantity": 12,
        "min_threshold": 5,
        "max_threshold": 40
    }))
    .unwrap();
    assert_eq!(item.max_threshold, Some(40));
}

// =============================================================
// Drafts
// =============================================================

#[test]
fn client_defaults_to_active() {
    let client: Client =
        serde_json::from_value(serde_json::json!({ "id": "c-1", "name": "Rosa", "email": "rosa@example.com" })).unwrap();
    assert!(client.active);
}

#[test]
fn worker_draft_omits_password_when_unset() {
    let draft = WorkerDraft { name: "Ben".to_owned(), email: "ben@example.com".to_owned(), ..WorkerDraft::default() };
    let value = serde_json::to_value(&draft).unwrap();
    assert!(value.get("password").is_none());
}

#[test]
fn task_draft_from_task_carries_reference_images_as_media_ids() {
    let task = Task {
        id: "t-1".to_owned(),
        title: "Plant roses".to_owned(),
        description: None,
        site_id: "s-1".to_owned(),
        section_id: Some("sec-1".to_owned()),
        client_id: "c-1".to_owned(),
        worker_id: None,
        status: TaskStatus::Pending,
        scheduled_for: None,
        reference_images: vec![ReferenceImage {
            id: "m-9".to_owned(),
            url: "/m/9.jpg".to_owned(),
            label: Some("Rose bed".to_owned()),
            quantity: 4,
        }],
        before_photos: Vec::new(),
        after_photos: Vec::new(),
        has_feedback: false,
    };
    let draft = TaskDraft::from(&task);
    assert_eq!(draft.section_id.as_deref(), Some("sec-1"));
    assert_eq!(draft.reference_images.len(), 1);
    assert_eq!(draft.reference_images[0].media_id, "m-9");
    assert_eq!(draft.reference_images[0].quantity, 4);
}
