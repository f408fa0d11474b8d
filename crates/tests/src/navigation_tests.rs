use pretty_assertions::assert_eq;
use shared_types::{event_catalog, AppModel, RegistrationTarget, UserRole, ViewState};

use crate::common::{any_credentials, filled_form};

// ---------------------------------------------------------------------------
// Events <-> Admin navigation
// ---------------------------------------------------------------------------

#[test]
fn events_and_admin_navigate_both_ways() {
    let mut model = AppModel::new();
    model.skip_login();

    model.show_admin();
    assert_eq!(model.view(), ViewState::Admin);

    model.show_events();
    assert_eq!(model.view(), ViewState::Events);
}

#[test]
fn admin_view_is_reachable_without_the_admin_role() {
    // There is no access-control check anywhere.
    let mut model = AppModel::new();
    model.skip_login();
    model.show_admin();
    assert_eq!(model.view(), ViewState::Admin);
    assert_eq!(model.role(), None);
}

#[test]
fn admin_roster_reflects_submissions_made_from_events() {
    let mut model = AppModel::new();
    model.login(UserRole::Student, any_credentials());

    model.open_registration(RegistrationTarget::Event(event_catalog().remove(3)));
    model.submit_registration(filled_form("Bob"));

    model.show_admin();
    assert_eq!(model.registrations().len(), 1);
}

#[test]
fn modal_overlays_the_admin_view() {
    let mut model = AppModel::new();
    model.login(UserRole::Admin, any_credentials());
    assert_eq!(model.view(), ViewState::Admin);

    model.open_registration(RegistrationTarget::Event(event_catalog().remove(0)));
    assert!(model.modal_open());
    assert_eq!(model.view(), ViewState::Admin, "view unchanged under modal");
}

// ---------------------------------------------------------------------------
// Fresh state
// ---------------------------------------------------------------------------

#[test]
fn a_fresh_model_is_the_login_screen_with_nothing_accumulated() {
    // Equivalent of a page reload: everything resets.
    let model = AppModel::new();
    assert_eq!(model.view(), ViewState::Login);
    assert_eq!(model.role(), None);
    assert!(model.registrations().is_empty());
    assert!(!model.modal_open());
}

#[test]
fn empty_roster_is_representable() {
    let mut model = AppModel::new();
    model.login(UserRole::Admin, any_credentials());
    assert!(model.registrations().is_empty());
}
