use super::*;

fn photo(n: usize) -> Photo {
    Photo { id: format!("p{n}"), url: format!("/media/p{n}.jpg") }
}

fn photos(count: usize) -> Vec<Photo> {
    (1..=count).map(photo).collect()
}

fn reference(id: &str, quantity: i64) -> ReferenceImage {
    ReferenceImage { id: id.to_owned(), url: format!("/media/{id}.jpg"), label: None, quantity }
}

fn ids(slot: &PhotoSlot) -> Vec<&str> {
    slot.photos.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn photos_fill_slots_in_reference_order() {
    let split = split_photos(&photos(5), &[reference("roses", 2), reference("hedge", 3)]);
    assert_eq!(split.slots.len(), 2);
    assert_eq!(ids(&split.slots[0]), vec!["p1", "p2"]);
    assert_eq!(ids(&split.slots[1]), vec!["p3", "p4", "p5"]);
    assert!(split.overflow.is_empty());
    assert!(split.is_complete());
    assert_eq!(split.total_expected(), 5);
}

#[test]
fn short_photo_list_leaves_later_slots_missing() {
    let split = split_photos(&photos(3), &[reference("roses", 2), reference("hedge", 3)]);
    assert_eq!(split.slots[0].missing(), 0);
    assert_eq!(ids(&split.slots[1]), vec!["p3"]);
    assert_eq!(split.slots[1].missing(), 2);
    assert!(!split.is_complete());
    assert_eq!(split.total_missing(), 2);
}

#[test]
fn extra_photos_go_to_overflow() {
    let split = split_photos(&photos(4), &[reference("tree", 1), reference("bed", 1)]);
    assert_eq!(split.overflow.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(), vec!["p3", "p4"]);
    assert!(split.is_complete());
}

#[test]
fn zero_quantity_counts_as_one_photo() {
    let split = split_photos(&photos(2), &[reference("lawn", 0), reference("path", -3)]);
    assert_eq!(split.slots[0].expected, 1);
    assert_eq!(split.slots[1].expected, 1);
    assert_eq!(ids(&split.slots[1]), vec!["p2"]);
}

#[test]
fn no_references_puts_everything_in_overflow() {
    let split = split_photos(&photos(2), &[]);
    assert!(split.slots.is_empty());
    assert_eq!(split.overflow.len(), 2);
    assert!(split.is_complete());
}

#[test]
fn no_photos_leaves_every_slot_empty() {
    let split = split_photos(&[], &[reference("roses", 2)]);
    assert!(split.slots[0].photos.is_empty());
    assert_eq!(split.slots[0].missing(), 2);
    assert!(!split.slots[0].is_filled());
}

#[test]
fn huge_quantities_saturate_totals() {
    let huge = [reference("a", i64::MAX), reference("b", i64::MAX), reference("c", i64::MAX)];
    let split = split_photos(&photos(1), &huge);
    assert_eq!(split.total_expected(), usize::MAX);
    assert_eq!(split.total_missing(), usize::MAX);
    assert!(!split.is_complete());
}
