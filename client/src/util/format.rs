//! Display formatting for wire values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::Feedback;

/// `2026-04-01T08:30:00Z` → `2026-04-01 08:30`. Inputs that are not ISO 8601
/// timestamps are returned unchanged.
#[must_use]
pub fn short_datetime(raw: &str) -> String {
    match raw.split_once('T').and_then(|(date, time)| Some((date, time.get(..5)?))) {
        Some((date, hm)) => format!("{date} {hm}"),
        None => raw.to_owned(),
    }
}

/// Five-star strip for a 1–5 rating.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Mean rating with one decimal, or `None` without feedback.
#[must_use]
pub fn average_rating(feedback: &[Feedback]) -> Option<f64> {
    if feedback.is_empty() {
        return None;
    }
    let sum: u32 = feedback.iter().map(|f| u32::from(f.rating)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = f64::from(sum) / feedback.len() as f64;
    Some((mean * 10.0).round() / 10.0)
}

/// `"3 items"`, `"1 item"`.
#[must_use]
pub fn count_label(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 { format!("1 {singular}") } else { format!("{count} {plural}") }
}
