use serde::{Deserialize, Serialize};

use crate::event::Event;

/// An image picked in the registration form, held entirely in memory.
///
/// The bytes are encoded into a data URL so the admin roster can render
/// them without any storage backend. Nothing survives a page reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedImage {
    pub file_name: String,
    pub content_type: String,
    pub data_url: String,
}

impl UploadedImage {
    /// Build a data URL image from raw bytes read off the file picker.
    pub fn from_bytes(file_name: String, content_type: String, bytes: &[u8]) -> Self {
        use base64::Engine as _;
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        let data_url = format!("data:{content_type};base64,{encoded}");
        Self {
            file_name,
            content_type,
            data_url,
        }
    }
}

/// The fields collected by the registration form.
///
/// The date is kept exactly as the date input produced it; required-field
/// and format enforcement is left to the native inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub date: String,
    pub message: String,
    pub image: Option<UploadedImage>,
}

/// A submitted registration: the form data tagged with the event it was
/// submitted for. `event` is `None` for registrations opened straight from
/// the login screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub event: Option<Event>,
    pub form: RegistrationForm,
}

/// What an open registration modal is bound to.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationTarget {
    /// Opened from the login screen with no event chosen.
    General,
    Event(Event),
}

impl RegistrationTarget {
    /// Title of the targeted event, if any.
    pub fn event_title(&self) -> Option<&str> {
        match self {
            RegistrationTarget::General => None,
            RegistrationTarget::Event(event) => Some(&event.title),
        }
    }

    pub fn into_event(self) -> Option<Event> {
        match self {
            RegistrationTarget::General => None,
            RegistrationTarget::Event(event) => Some(event),
        }
    }
}
