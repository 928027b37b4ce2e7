use super::*;

fn feedback(rating: u8) -> Feedback {
    Feedback {
        id: format!("f{rating}"),
        task_id: "t1".to_owned(),
        client_id: "c1".to_owned(),
        rating,
        comment: None,
        created_at: "2026-04-01T08:00:00Z".to_owned(),
    }
}

#[test]
fn short_datetime_trims_seconds_and_zone() {
    assert_eq!(short_datetime("2026-04-01T08:30:15Z"), "2026-04-01 08:30");
}

#[test]
fn short_datetime_passes_through_plain_dates() {
    assert_eq!(short_datetime("2026-04-01"), "2026-04-01");
    assert_eq!(short_datetime("2026-04-01T8"), "2026-04-01T8");
}

#[test]
fn stars_fill_to_rating() {
    assert_eq!(stars(3), "★★★☆☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}

#[test]
fn average_rating_rounds_to_one_decimal() {
    assert_eq!(average_rating(&[feedback(5), feedback(4), feedback(4)]), Some(4.3));
    assert_eq!(average_rating(&[]), None);
}

#[test]
fn count_label_pluralises() {
    assert_eq!(count_label(1, "task", "tasks"), "1 task");
    assert_eq!(count_label(0, "task", "tasks"), "0 tasks");
}
