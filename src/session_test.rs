use super::*;
use std::cell::RefCell;

#[derive(Default)]
struct FakeSession {
    user: RefCell<Option<String>>,
}

impl SessionStore for FakeSession {
    fn current_user(&self) -> Option<String> {
        self.user.borrow().clone()
    }

    fn set_user(&self, user: &str) {
        *self.user.borrow_mut() = Some(user.to_owned());
    }

    fn clear(&self) {
        *self.user.borrow_mut() = None;
    }
}

#[test]
fn should_be_unauthenticated_by_default() {
    let session = FakeSession::default();
    assert!(session.current_user().is_none());
    assert!(!session.is_authenticated());
}

#[test]
fn should_authenticate_after_set_user() {
    let session = FakeSession::default();
    session.set_user("alice");
    assert!(session.is_authenticated());
    assert_eq!(session.current_user().as_deref(), Some("alice"));
}

#[test]
fn should_treat_empty_value_as_logged_out() {
    let session = FakeSession::default();
    session.set_user("");
    assert!(session.current_user().is_some());
    assert!(!session.is_authenticated());
}

#[test]
fn should_not_interpret_the_stored_value() {
    let session = FakeSession::default();
    session.set_user("{\"anything\": true}");
    assert!(session.is_authenticated());
}

#[test]
fn should_log_out_after_clear() {
    let session = FakeSession::default();
    session.set_user("alice");
    session.clear();
    assert!(!session.is_authenticated());
    assert!(session.current_user().is_none());
}
