use dioxus::prelude::*;
use shared_types::ViewState;

mod state;
mod views;

use state::{use_app_state, AppState};
use views::{AdminRoster, EventCatalog, LoginPage, RegistrationDialog};

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(AppState::new);

    let state = use_app_state();

    // The modal is driven by the selected registration target, not the
    // view state, so it can overlay any screen.
    let modal_target = state.modal_target();

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }

        div { class: "app-shell",
            match state.view() {
                ViewState::Login => rsx! { LoginPage {} },
                ViewState::Events => rsx! { EventCatalog {} },
                ViewState::Admin => rsx! { AdminRoster {} },
            }

            if let Some(target) = modal_target {
                RegistrationDialog { target }
            }
        }
    }
}
