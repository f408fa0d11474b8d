use crate::registration::{Registration, RegistrationForm, RegistrationTarget};
use crate::session::{Credentials, UserRole, ViewState};

/// The whole application state, mutated only through the transition
/// methods below. The UI layer wraps this in a signal and calls one
/// method per user action; nothing else writes to it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppModel {
    view: ViewState,
    selected: Option<RegistrationTarget>,
    registrations: Vec<Registration>,
    role: Option<UserRole>,
}

impl AppModel {
    /// Fresh state: login screen, no role, no registrations. A page
    /// reload produces exactly this.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn role(&self) -> Option<UserRole> {
        self.role
    }

    /// Target of the open registration modal, or `None` when closed.
    pub fn selected(&self) -> Option<&RegistrationTarget> {
        self.selected.as_ref()
    }

    /// Submitted registrations, in submission order. Append-only.
    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// Login always succeeds; the credentials are dropped unchecked.
    /// Students land on the event catalog, admins on the roster.
    pub fn login(&mut self, role: UserRole, _credentials: Credentials) {
        self.role = Some(role);
        self.view = match role {
            UserRole::Student => ViewState::Events,
            UserRole::Admin => ViewState::Admin,
        };
    }

    /// Bypass login entirely. No role is recorded.
    pub fn skip_login(&mut self) {
        self.view = ViewState::Events;
    }

    /// Open the registration modal over the current view.
    pub fn open_registration(&mut self, target: RegistrationTarget) {
        self.selected = Some(target);
    }

    /// Append the submitted form, tagged with the selected event, and
    /// close the modal.
    pub fn submit_registration(&mut self, form: RegistrationForm) {
        let event = self.selected.take().and_then(RegistrationTarget::into_event);
        self.registrations.push(Registration { event, form });
    }

    /// Close the modal without touching the registration list.
    pub fn cancel_registration(&mut self) {
        self.selected = None;
    }

    pub fn show_events(&mut self) {
        self.view = ViewState::Events;
    }

    pub fn show_admin(&mut self) {
        self.view = ViewState::Admin;
    }
}

/// Convenience for the overlay condition in the view layer.
impl AppModel {
    pub fn modal_open(&self) -> bool {
        self.selected.is_some()
    }
}
