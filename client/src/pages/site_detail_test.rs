use super::*;

#[test]
fn section_input_parses_area() {
    let input = SectionInput { name: "Front lawn".to_owned(), area: "120.5".to_owned(), notes: String::new() };
    let draft = input.to_draft().unwrap();
    assert_eq!(draft.area_sqm, Some(120.5));
}

#[test]
fn section_input_blank_area_is_unset() {
    let input = SectionInput { name: "Greenhouse".to_owned(), ..SectionInput::default() };
    assert_eq!(input.to_draft().unwrap().area_sqm, None);
}

#[test]
fn section_input_rejects_negative_area() {
    let input = SectionInput { name: "Hedge".to_owned(), area: "-3".to_owned(), notes: String::new() };
    assert_eq!(input.to_draft(), Err("Area must be a positive number.".to_owned()));
}

#[test]
fn area_label_formats_surveyed_sections() {
    assert_eq!(area_label(Some(40.0)), "40 m²");
    assert_eq!(area_label(None), "—");
}
