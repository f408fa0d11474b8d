use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdMail, LdMessageSquare, LdUpload, LdUser};
use dioxus_free_icons::Icon;
use shared_types::{RegistrationForm, RegistrationTarget, UploadedImage};
use shared_ui::{
    Button, ButtonVariant, Dialog, DialogClose, DialogDescription, DialogFooter, DialogHeader,
    DialogTitle, Form, Input, Label, Textarea,
};

use crate::state::use_app_state;

/// Registration form rendered as a modal over whichever view is active.
///
/// Required-field and email/date format enforcement is left to the
/// native inputs. The picked image is read into memory and kept as a
/// data URL; it is never uploaded anywhere.
#[component]
pub fn RegistrationDialog(target: RegistrationTarget) -> Element {
    let mut state = use_app_state();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut image = use_signal(|| Option::<UploadedImage>::None);

    // A target opened from the login screen has no event attached.
    let title = match target.event_title() {
        Some(event_title) => format!("Register for {event_title}"),
        None => "New Registration".to_string(),
    };

    let handle_file = move |evt: FormEvent| async move {
        let files = evt.files();
        if let Some(file) = files.first() {
            let content_type = file
                .content_type()
                .unwrap_or_else(|| "image/jpeg".to_string());
            match file.read_bytes().await {
                Ok(bytes) => {
                    image.set(Some(UploadedImage::from_bytes(
                        file.name(),
                        content_type,
                        &bytes,
                    )));
                }
                Err(_) => {
                    tracing::warn!("failed to read picked image");
                    image.set(None);
                }
            }
        }
    };

    let handle_submit = move |_evt: FormEvent| {
        let form = RegistrationForm {
            name: name(),
            email: email(),
            date: date(),
            message: message(),
            image: image(),
        };
        state.submit_registration(form);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./register.css") }

        Dialog {
            open: true,
            on_close: move |_| state.cancel_registration(),

            DialogHeader {
                DialogTitle { "{title}" }
                DialogDescription { "Fill in your details to complete the registration." }
                DialogClose { on_close: move |_| state.cancel_registration() }
            }

            Form { onsubmit: handle_submit,
                div { class: "register-field",
                    Label { html_for: "reg-name",
                        Icon::<LdUser> { icon: LdUser, width: 14, height: 14 }
                        "Name"
                    }
                    Input {
                        id: "reg-name",
                        required: true,
                        value: name(),
                        on_input: move |e: FormEvent| name.set(e.value()),
                    }
                }
                div { class: "register-field",
                    Label { html_for: "reg-email",
                        Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                        "Email"
                    }
                    Input {
                        input_type: "email",
                        id: "reg-email",
                        required: true,
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                }
                div { class: "register-field",
                    Label { html_for: "reg-date",
                        Icon::<LdCalendar> { icon: LdCalendar, width: 14, height: 14 }
                        "Date"
                    }
                    Input {
                        input_type: "date",
                        id: "reg-date",
                        required: true,
                        value: date(),
                        on_input: move |e: FormEvent| date.set(e.value()),
                    }
                }
                div { class: "register-field",
                    Label { html_for: "reg-message",
                        Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 14, height: 14 }
                        "Message"
                    }
                    Textarea {
                        id: "reg-message",
                        required: true,
                        value: message(),
                        on_input: move |e: FormEvent| message.set(e.value()),
                    }
                }
                div { class: "register-field",
                    Label { html_for: "reg-image",
                        Icon::<LdUpload> { icon: LdUpload, width: 14, height: 14 }
                        "Upload Image"
                    }
                    input {
                        id: "reg-image",
                        class: "register-file-input",
                        r#type: "file",
                        accept: "image/*",
                        required: true,
                        onchange: handle_file,
                    }
                    if let Some(picked) = image() {
                        p { class: "register-file-name", "{picked.file_name}" }
                    }
                }

                DialogFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| state.cancel_registration(),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "button",
                        "data-style": "primary",
                        "Submit"
                    }
                }
            }
        }
    }
}
