use super::*;

fn client(name: &str, email: &str, address: Option<&str>) -> Client {
    Client {
        id: format!("c-{name}"),
        name: name.to_owned(),
        email: email.to_owned(),
        phone: None,
        address: address.map(str::to_owned),
        notes: None,
        active: true,
    }
}

fn sample_clients() -> Vec<Client> {
    vec![
        client("Rosa Banks", "rosa@example.com", Some("12 Elm Street")),
        client("Tom Reed", "tom@garden.io", Some("4 Oak Lane")),
        client("Ada Moss", "ada@example.com", None),
    ]
}

// =============================================================
// filter_by_text
// =============================================================

#[test]
fn empty_query_keeps_everything() {
    let clients = sample_clients();
    assert_eq!(filter_by_text(&clients, "   ").len(), 3);
}

#[test]
fn query_is_case_insensitive() {
    let found = filter_by_text(&sample_clients(), "ROSA");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Rosa Banks");
}

#[test]
fn all_terms_must_match() {
    let clients = sample_clients();
    assert_eq!(filter_by_text(&clients, "example ada").len(), 1);
    assert_eq!(filter_by_text(&clients, "example oak").len(), 0);
}

#[test]
fn optional_fields_are_searched() {
    let found = filter_by_text(&sample_clients(), "elm");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Rosa Banks");
}

#[test]
fn task_haystack_includes_status_label() {
    let task = Task {
        id: "t-1".to_owned(),
        title: "Prune hedges".to_owned(),
        description: None,
        site_id: "s-1".to_owned(),
        section_id: None,
        client_id: "c-1".to_owned(),
        worker_id: None,
        status: crate::net::types::TaskStatus::InProgress,
        scheduled_for: Some("2026-05-01".to_owned()),
        reference_images: Vec::new(),
        before_photos: Vec::new(),
        after_photos: Vec::new(),
        has_feedback: false,
    };
    assert!(matches_query(&task.haystack(), "in progress"));
    assert!(matches_query(&task.haystack(), "2026-05"));
}

// =============================================================
// paginate
// =============================================================

#[test]
fn paginate_returns_requested_slice() {
    let items: Vec<u32> = (1..=25).collect();
    let page = paginate(&items, 2, 10);
    assert_eq!(page.items, (11..=20).collect::<Vec<_>>());
    assert_eq!(page.total, 25);
    assert_eq!(page.total_pages, 3);
    assert!(page.has_prev());
    assert!(page.has_next());
    assert_eq!(page.range(), (11, 20));
}

#[test]
fn paginate_last_page_is_partial() {
    let items: Vec<u32> = (1..=25).collect();
    let page = paginate(&items, 3, 10);
    assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
    assert!(!page.has_next());
    assert_eq!(page.range(), (21, 25));
}

#[test]
fn paginate_clamps_out_of_range_pages() {
    let items: Vec<u32> = (1..=25).collect();
    assert_eq!(paginate(&items, 99, 10).page, 3);
    assert_eq!(paginate(&items, 0, 10).page, 1);
}

#[test]
fn paginate_empty_list_has_one_page() {
    let items: Vec<u32> = Vec::new();
    let page = paginate(&items, 4, 10);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());
    assert_eq!(page.range(), (0, 0));
    assert!(!page.has_prev());
    assert!(!page.has_next());
}

#[test]
fn paginate_zero_per_page_uses_default() {
    let items: Vec<u32> = (1..=15).collect();
    let page = paginate(&items, 1, 0);
    assert_eq!(page.per_page, DEFAULT_PER_PAGE);
    assert_eq!(page.items.len(), 10);
}

// =============================================================
// page_window
// =============================================================

#[test]
fn page_window_centres_on_current_page() {
    assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
}

#[test]
fn page_window_sticks_to_edges() {
    assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
    assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
}

#[test]
fn page_window_shrinks_to_total_pages() {
    assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
    assert_eq!(page_window(1, 0, 5), vec![1]);
}
