use dioxus::prelude::*;
use shared_types::{
    AppModel, Credentials, Registration, RegistrationForm, RegistrationTarget, UserRole, ViewState,
};

/// Global application state: the pure model behind a single signal.
///
/// Every user action funnels through one of the methods below; views
/// never write to the model directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppState {
    pub model: Signal<AppModel>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            model: Signal::new(AppModel::new()),
        }
    }

    pub fn view(&self) -> ViewState {
        self.model.read().view()
    }

    /// Target of the open registration modal, cloned for rendering.
    pub fn modal_target(&self) -> Option<RegistrationTarget> {
        self.model.read().selected().cloned()
    }

    pub fn registrations(&self) -> Vec<Registration> {
        self.model.read().registrations().to_vec()
    }

    pub fn login(&mut self, role: UserRole, credentials: Credentials) {
        tracing::info!(role = role.as_str(), "login accepted");
        self.model.write().login(role, credentials);
    }

    pub fn skip_login(&mut self) {
        tracing::info!("login skipped");
        self.model.write().skip_login();
    }

    pub fn open_registration(&mut self, target: RegistrationTarget) {
        tracing::debug!(
            event_title = target.event_title().unwrap_or("none"),
            "registration modal opened"
        );
        self.model.write().open_registration(target);
    }

    pub fn submit_registration(&mut self, form: RegistrationForm) {
        tracing::info!("registration recorded");
        self.model.write().submit_registration(form);
    }

    pub fn cancel_registration(&mut self) {
        self.model.write().cancel_registration();
    }

    pub fn show_events(&mut self) {
        self.model.write().show_events();
    }

    pub fn show_admin(&mut self) {
        self.model.write().show_admin();
    }
}

/// Hook to access the shared application state.
pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
