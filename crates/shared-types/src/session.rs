use serde::{Deserialize, Serialize};

/// The credential pair collected by the login form.
///
/// Held only for the lifetime of a submission; never checked against
/// anything and dropped once the login transition runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Role selected at login. Stored once and never consulted by any
/// access-control check; any user can reach the admin view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Student,
    Admin,
}

impl UserRole {
    /// Internal key used for logging and toggle values.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Admin => "admin",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Admin => "Admin",
        }
    }
}

/// Which top-level screen is rendered.
///
/// The registration modal is not a variant: it is represented by the
/// presence of a selected registration target so it can overlay any view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Login,
    Events,
    Admin,
}
