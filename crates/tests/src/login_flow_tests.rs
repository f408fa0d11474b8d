use pretty_assertions::assert_eq;
use shared_types::{AppModel, Credentials, UserRole, ViewState};

use crate::common::any_credentials;

// ---------------------------------------------------------------------------
// Login: every attempt succeeds; the role only decides the landing view
// ---------------------------------------------------------------------------

#[test]
fn student_login_lands_on_events() {
    let mut model = AppModel::new();
    model.login(UserRole::Student, any_credentials());
    assert_eq!(model.view(), ViewState::Events);
    assert_eq!(model.role(), Some(UserRole::Student));
}

#[test]
fn admin_login_lands_on_admin() {
    let mut model = AppModel::new();
    model.login(UserRole::Admin, any_credentials());
    assert_eq!(model.view(), ViewState::Admin);
    assert_eq!(model.role(), Some(UserRole::Admin));
}

#[test]
fn credentials_are_never_checked() {
    // Even an empty credential pair goes through; there is no rejected path.
    let mut model = AppModel::new();
    model.login(UserRole::Student, Credentials::default());
    assert_eq!(model.view(), ViewState::Events);
}

#[test]
fn login_does_not_touch_registrations() {
    let mut model = AppModel::new();
    model.login(UserRole::Admin, any_credentials());
    assert!(model.registrations().is_empty());
}

// ---------------------------------------------------------------------------
// Skip login
// ---------------------------------------------------------------------------

#[test]
fn skip_login_lands_on_events_without_a_role() {
    let mut model = AppModel::new();
    model.skip_login();
    assert_eq!(model.view(), ViewState::Events);
    assert_eq!(model.role(), None);
}
