use shared_types::{Credentials, RegistrationForm};

/// Arbitrary non-empty credentials; their content never matters because
/// no login path checks them.
pub fn any_credentials() -> Credentials {
    Credentials {
        email: "someone@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

/// A fully-populated registration form, the way the modal submits it.
pub fn filled_form(name: &str) -> RegistrationForm {
    RegistrationForm {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        date: "2024-03-15".to_string(),
        message: "Looking forward to it".to_string(),
        image: None,
    }
}
