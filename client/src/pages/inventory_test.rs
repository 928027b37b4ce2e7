use super::*;

fn item(name: &str, quantity: i64, min: i64) -> InventoryItem {
    InventoryItem {
        id: name.to_owned(),
        name: name.to_owned(),
        unit: "bag".to_owned(),
        quantity,
        min_threshold: min,
        max_threshold: None,
        category: None,
    }
}

fn filled() -> InventoryInput {
    InventoryInput {
        name: "Mulch".to_owned(),
        unit: "bag".to_owned(),
        quantity: "12".to_owned(),
        min_threshold: "5".to_owned(),
        max_threshold: String::new(),
        category: String::new(),
    }
}

#[test]
fn to_draft_parses_numbers() {
    let draft = filled().to_draft().unwrap();
    assert_eq!(draft.quantity, 12);
    assert_eq!(draft.min_threshold, 5);
    assert_eq!(draft.max_threshold, None);
}

#[test]
fn to_draft_rejects_ceiling_below_threshold() {
    let input = InventoryInput { max_threshold: "3".to_owned(), ..filled() };
    assert_eq!(input.to_draft(), Err("Maximum cannot be below the reorder threshold.".to_owned()));
}

#[test]
fn to_draft_rejects_negative_quantity() {
    let input = InventoryInput { quantity: "-1".to_owned(), ..filled() };
    assert_eq!(input.to_draft(), Err("Quantity cannot be negative.".to_owned()));
}

#[test]
fn adjustment_input_previews_resulting_stock() {
    assert_eq!(adjustment_input(10, "+5", "Delivery"), Ok((5, "Delivery".to_owned(), 15)));
    assert_eq!(adjustment_input(10, "-10", "Used"), Ok((-10, "Used".to_owned(), 0)));
}

#[test]
fn adjustment_input_requires_reason_and_stock() {
    assert_eq!(adjustment_input(10, "-2", "  "), Err("Reason is required.".to_owned()));
    assert_eq!(adjustment_input(2, "-5", "Used"), Err("Only 2 in stock; cannot remove 5.".to_owned()));
    assert_eq!(adjustment_input(2, "0", "Used"), Err("Enter a non-zero amount.".to_owned()));
}

#[test]
fn visible_items_low_only_keeps_reorder_candidates() {
    let items = vec![item("bark", 0, 2), item("twine", 40, 5), item("compost", 3, 5)];
    let names: Vec<String> = visible_items(&items, true).into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["bark", "compost"]);
    assert_eq!(visible_items(&items, false).len(), 3);
}
