use super::*;
use crate::net::types::{Session, User};

fn signed_in(role: Role) -> AuthState {
    AuthState::signed_in(Session {
        token: "t".to_owned(),
        user: User {
            id: "u1".to_owned(),
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            role,
            phone: None,
        },
    })
}

#[test]
fn no_redirect_while_loading() {
    assert_eq!(guard_target(&AuthState::restoring(), &ADMIN_ONLY), None);
}

#[test]
fn signed_out_goes_to_login() {
    assert_eq!(guard_target(&AuthState::default(), &ALL_ROLES), Some("/login"));
}

#[test]
fn wrong_role_goes_home() {
    assert_eq!(guard_target(&signed_in(Role::Worker), &ADMIN_ONLY), Some("/worker"));
    assert_eq!(guard_target(&signed_in(Role::Client), &[Role::Admin, Role::Worker]), Some("/client"));
}

#[test]
fn allowed_role_stays() {
    assert_eq!(guard_target(&signed_in(Role::Admin), &ADMIN_ONLY), None);
    assert_eq!(guard_target(&signed_in(Role::Client), &ALL_ROLES), None);
}
