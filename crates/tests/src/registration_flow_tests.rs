use pretty_assertions::assert_eq;
use shared_types::{
    event_catalog, AppModel, RegistrationTarget, UploadedImage, UserRole, ViewState,
};

use crate::common::{any_credentials, filled_form};

// ---------------------------------------------------------------------------
// Opening the modal
// ---------------------------------------------------------------------------

#[test]
fn register_action_targets_the_chosen_event() {
    for event in event_catalog() {
        let mut model = AppModel::new();
        model.skip_login();
        model.open_registration(RegistrationTarget::Event(event.clone()));

        assert!(model.modal_open());
        let target = model.selected().expect("modal target");
        assert_eq!(target.event_title(), Some(event.title.as_str()));
    }
}

#[test]
fn opening_the_modal_does_not_change_the_view() {
    let mut model = AppModel::new();
    model.skip_login();
    let event = event_catalog().remove(0);
    model.open_registration(RegistrationTarget::Event(event));
    assert_eq!(model.view(), ViewState::Events);
}

#[test]
fn login_screen_registration_has_no_event() {
    let mut model = AppModel::new();
    model.open_registration(RegistrationTarget::General);

    assert!(model.modal_open());
    assert_eq!(model.selected().and_then(|t| t.event_title()), None);

    model.submit_registration(filled_form("Dana"));
    assert_eq!(model.registrations()[0].event, None);
}

// ---------------------------------------------------------------------------
// Submit
// ---------------------------------------------------------------------------

#[test]
fn submit_appends_exactly_one_entry_for_the_selected_event() {
    let mut model = AppModel::new();
    model.skip_login();
    let event = event_catalog().remove(1);
    model.open_registration(RegistrationTarget::Event(event.clone()));

    model.submit_registration(filled_form("Alice"));

    assert_eq!(model.registrations().len(), 1);
    let entry = &model.registrations()[0];
    assert_eq!(entry.event.as_ref(), Some(&event));
    assert_eq!(entry.form.name, "Alice");
}

#[test]
fn submit_closes_the_modal() {
    let mut model = AppModel::new();
    model.skip_login();
    model.open_registration(RegistrationTarget::Event(event_catalog().remove(0)));

    model.submit_registration(filled_form("Alice"));

    assert!(!model.modal_open());
    assert_eq!(model.selected(), None);
}

#[test]
fn submissions_accumulate_in_order() {
    let mut model = AppModel::new();
    model.skip_login();
    let catalog = event_catalog();

    for (i, name) in ["Alice", "Bob", "Carol"].iter().enumerate() {
        model.open_registration(RegistrationTarget::Event(catalog[i].clone()));
        model.submit_registration(filled_form(name));
    }

    let names: Vec<&str> = model
        .registrations()
        .iter()
        .map(|r| r.form.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
}

#[test]
fn duplicate_submissions_are_all_kept() {
    // The list is append-only with no identity key: registering twice for
    // the same event with the same form yields two entries.
    let mut model = AppModel::new();
    model.skip_login();
    let event = event_catalog().remove(2);

    for _ in 0..2 {
        model.open_registration(RegistrationTarget::Event(event.clone()));
        model.submit_registration(filled_form("Alice"));
    }

    assert_eq!(model.registrations().len(), 2);
    assert_eq!(model.registrations()[0], model.registrations()[1]);
}

#[test]
fn submitted_image_is_carried_through() {
    let mut model = AppModel::new();
    model.skip_login();
    model.open_registration(RegistrationTarget::Event(event_catalog().remove(0)));

    let mut form = filled_form("Alice");
    form.image = Some(UploadedImage::from_bytes(
        "badge.png".to_string(),
        "image/png".to_string(),
        &[0x89, 0x50, 0x4e, 0x47],
    ));
    model.submit_registration(form);

    let image = model.registrations()[0]
        .form
        .image
        .as_ref()
        .expect("image kept");
    assert_eq!(image.file_name, "badge.png");
    assert!(image.data_url.starts_with("data:image/png;base64,"));
}

// ---------------------------------------------------------------------------
// Cancel
// ---------------------------------------------------------------------------

#[test]
fn cancel_closes_the_modal_and_keeps_the_list_unchanged() {
    let mut model = AppModel::new();
    model.skip_login();
    model.open_registration(RegistrationTarget::Event(event_catalog().remove(0)));

    model.cancel_registration();

    assert!(!model.modal_open());
    assert!(model.registrations().is_empty());
}

#[test]
fn cancel_after_earlier_submissions_preserves_them() {
    let mut model = AppModel::new();
    model.login(UserRole::Student, any_credentials());
    let catalog = event_catalog();

    model.open_registration(RegistrationTarget::Event(catalog[0].clone()));
    model.submit_registration(filled_form("Alice"));

    model.open_registration(RegistrationTarget::Event(catalog[1].clone()));
    model.cancel_registration();

    assert_eq!(model.registrations().len(), 1);
    assert_eq!(model.registrations()[0].form.name, "Alice");
}
