use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("Name", "  Rosa  "), Ok("Rosa".to_owned()));
    assert_eq!(required("Name", "   "), Err("Name is required.".to_owned()));
}

#[test]
fn optional_maps_blank_to_none() {
    assert_eq!(optional("  "), None);
    assert_eq!(optional(" 555-0100 "), Some("555-0100".to_owned()));
}

#[test]
fn email_accepts_plain_addresses() {
    assert_eq!(email(" rosa@example.com "), Ok("rosa@example.com".to_owned()));
    assert_eq!(email("a.b+c@mail.garden.io"), Ok("a.b+c@mail.garden.io".to_owned()));
}

#[test]
fn email_rejects_malformed_addresses() {
    for bad in ["", "rosa", "@example.com", "rosa@", "rosa@example", "a@b@c.com", "ro sa@example.com", "rosa@.com"] {
        assert!(email(bad).is_err(), "expected rejection for {bad:?}");
    }
}

#[test]
fn parse_quantity_accepts_zero_and_positive() {
    assert_eq!(parse_quantity("Quantity", " 0 "), Ok(0));
    assert_eq!(parse_quantity("Quantity", "42"), Ok(42));
}

#[test]
fn parse_quantity_rejects_negative_and_text() {
    assert_eq!(parse_quantity("Quantity", "-1"), Err("Quantity cannot be negative.".to_owned()));
    assert_eq!(parse_quantity("Quantity", "ten"), Err("Quantity must be a whole number.".to_owned()));
}

#[test]
fn parse_optional_quantity_blank_is_none() {
    assert_eq!(parse_optional_quantity("Max", " "), Ok(None));
    assert_eq!(parse_optional_quantity("Max", "30"), Ok(Some(30)));
}

#[test]
fn parse_delta_accepts_signed_values() {
    assert_eq!(parse_delta("+5"), Ok(5));
    assert_eq!(parse_delta("-3"), Ok(-3));
    assert!(parse_delta("0").is_err());
    assert!(parse_delta("lots").is_err());
}

#[test]
fn parse_rating_bounds() {
    assert_eq!(parse_rating("1"), Ok(1));
    assert_eq!(parse_rating("5"), Ok(5));
    assert!(parse_rating("0").is_err());
    assert!(parse_rating("6").is_err());
    assert!(parse_rating("").is_err());
}

#[test]
fn parse_area_optional_positive() {
    assert_eq!(parse_area(""), Ok(None));
    assert_eq!(parse_area("12.5"), Ok(Some(12.5)));
    assert!(parse_area("-4").is_err());
    assert!(parse_area("0").is_err());
}
