use dioxus::prelude::*;
use shared_types::Registration;
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, PageActions, PageHeader,
    PageTitle,
};

use crate::state::use_app_state;

/// Admin roster: every submitted registration in submission order.
/// Read-only; no sorting, filtering, export, or deletion.
#[component]
pub fn AdminRoster() -> Element {
    let mut state = use_app_state();
    let registrations = state.registrations();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }

        div { class: "admin-page",
            PageHeader {
                PageTitle { "Admin Dashboard" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| state.show_events(),
                        "Back to Events"
                    }
                }
            }

            h2 { class: "admin-subtitle", "Registered Students" }

            if registrations.is_empty() {
                p { class: "admin-empty", "No registrations yet." }
            } else {
                div { class: "admin-list",
                    for registration in registrations {
                        RegistrationCard { registration }
                    }
                }
            }
        }
    }
}

#[component]
fn RegistrationCard(registration: Registration) -> Element {
    rsx! {
        Card { class: "admin-entry",
            CardContent {
                div { class: "admin-entry-row",
                    if let Some(picked) = registration.form.image.as_ref() {
                        img {
                            class: "admin-entry-image",
                            src: "{picked.data_url}",
                            alt: "{registration.form.name}",
                        }
                    }
                    div { class: "admin-entry-details",
                        h3 { class: "admin-entry-name", "{registration.form.name}" }
                        p { class: "admin-entry-email", "{registration.form.email}" }
                        p { class: "admin-entry-date", "{registration.form.date}" }
                        p { class: "admin-entry-message", "{registration.form.message}" }
                        if let Some(event) = registration.event.as_ref() {
                            Badge { variant: BadgeVariant::Secondary, "{event.title}" }
                        } else {
                            Badge { variant: BadgeVariant::Outline, "No event" }
                        }
                    }
                }
            }
        }
    }
}
