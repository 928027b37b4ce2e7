//! Input normalisers shared by record forms.
//!
//! Each helper trims its input and returns either the cleaned value or the
//! message to show next to the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// Trimmed non-empty value, or `"<label> is required."`.
///
/// # Errors
///
/// Returns the message when `value` is blank.
pub fn required(label: &str, value: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} is required."));
    }
    Ok(trimmed.to_owned())
}

/// `None` for blank input, the trimmed value otherwise.
#[must_use]
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Loose email shape check: one `@`, text on both sides, a dot in the domain.
///
/// # Errors
///
/// Returns a message when the shape does not match.
pub fn email(value: &str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    let mut parts = trimmed.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Enter a valid email address.");
    };
    let domain_ok = domain
        .split_once('.')
        .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty());
    if local.is_empty() || !domain_ok || trimmed.contains(char::is_whitespace) {
        return Err("Enter a valid email address.");
    }
    Ok(trimmed.to_owned())
}

/// Whole number of units, zero or more.
///
/// # Errors
///
/// Returns a message for non-numeric or negative input.
pub fn parse_quantity(label: &str, value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(n) if n >= 0 => Ok(n),
        Ok(_) => Err(format!("{label} cannot be negative.")),
        Err(_) => Err(format!("{label} must be a whole number.")),
    }
}

/// Optional whole number; blank means unset.
///
/// # Errors
///
/// See [`parse_quantity`].
pub fn parse_optional_quantity(label: &str, value: &str) -> Result<Option<i64>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_quantity(label, value).map(Some)
}

/// Signed stock change; zero is rejected.
///
/// # Errors
///
/// Returns a message for non-numeric or zero input.
pub fn parse_delta(value: &str) -> Result<i64, &'static str> {
    match value.trim().trim_start_matches('+').parse::<i64>() {
        Ok(0) => Err("Enter a non-zero amount."),
        Ok(n) => Ok(n),
        Err(_) => Err("Amount must be a whole number, e.g. 5 or -3."),
    }
}

/// Star rating between 1 and 5.
///
/// # Errors
///
/// Returns a message outside `1..=5`.
pub fn parse_rating(value: &str) -> Result<u8, &'static str> {
    match value.trim().parse::<u8>() {
        Ok(n @ 1..=5) => Ok(n),
        _ => Err("Choose a rating from 1 to 5."),
    }
}

/// Optional positive area in square metres.
///
/// # Errors
///
/// Returns a message for non-numeric or non-positive input.
pub fn parse_area(value: &str) -> Result<Option<f64>, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() && n > 0.0 => Ok(Some(n)),
        _ => Err("Area must be a positive number."),
    }
}
