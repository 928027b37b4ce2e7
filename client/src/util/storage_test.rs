#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_json_is_none_outside_browser() {
    save_json("verdant_test_key", &42_u32);
    assert_eq!(load_json::<u32>("verdant_test_key"), None);
}

#[test]
fn remove_is_noop_but_callable() {
    remove("verdant_test_key");
}
