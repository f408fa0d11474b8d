use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdEye;
use dioxus_free_icons::Icon;
use shared_types::{event_catalog, Event, RegistrationTarget};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardDescription, CardFooter, CardHeader,
    CardTitle, PageActions, PageHeader, PageTitle,
};

use crate::state::use_app_state;

/// Event catalog: the four hardcoded events rendered as a card grid.
/// No pagination, filtering, or search.
#[component]
pub fn EventCatalog() -> Element {
    let mut state = use_app_state();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./events.css") }

        div { class: "events-page",
            PageHeader {
                PageTitle { "Available Events" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| state.show_admin(),
                        Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                        "View Registrations"
                    }
                }
            }

            div { class: "events-grid",
                for event in event_catalog() {
                    EventCard { event }
                }
            }
        }
    }
}

/// One event card with its register action.
#[component]
fn EventCard(event: Event) -> Element {
    let mut state = use_app_state();
    let register_target = event.clone();

    rsx! {
        Card { class: "event-card",
            img {
                class: "event-card-image",
                src: "{event.image_url}",
                alt: "{event.title}",
            }
            CardHeader {
                CardTitle { "{event.title}" }
                CardDescription { "{event.description}" }
            }
            CardFooter {
                Badge { variant: BadgeVariant::Outline, {event.display_date()} }
                Button {
                    onclick: move |_| {
                        state.open_registration(RegistrationTarget::Event(register_target.clone()))
                    },
                    "Register"
                }
            }
        }
    }
}
