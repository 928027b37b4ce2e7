use super::*;

#[test]
fn site_input_requires_client_first() {
    let input = SiteInput { name: "North lawn".to_owned(), ..SiteInput::default() };
    assert_eq!(input.to_draft(), Err("Choose a client.".to_owned()));
}

#[test]
fn site_input_requires_address() {
    let input = SiteInput { client_id: "c-1".to_owned(), name: "Villa".to_owned(), ..SiteInput::default() };
    assert_eq!(input.to_draft(), Err("Address is required.".to_owned()));
}

#[test]
fn site_input_builds_trimmed_draft() {
    let input = SiteInput {
        client_id: "c-1".to_owned(),
        name: " Villa Rosa ".to_owned(),
        address: "2 Vine St".to_owned(),
        notes: " ".to_owned(),
    };
    let draft = input.to_draft().unwrap();
    assert_eq!(draft.name, "Villa Rosa");
    assert_eq!(draft.notes, None);
}

#[test]
fn client_name_falls_back_to_id() {
    let clients = vec![Client {
        id: "c-1".to_owned(),
        name: "Rosa".to_owned(),
        email: "rosa@example.com".to_owned(),
        phone: None,
        address: None,
        notes: None,
        active: true,
    }];
    assert_eq!(client_name(&clients, "c-1"), "Rosa");
    assert_eq!(client_name(&clients, "c-9"), "c-9");
}
