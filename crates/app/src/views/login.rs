use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLock, LdMail};
use dioxus_free_icons::Icon;
use shared_types::{Credentials, RegistrationTarget, UserRole};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardFooter, CardHeader, CardTitle, Form, Input,
    Label, Separator,
};

use crate::state::use_app_state;

/// Login page with a student/admin role toggle.
///
/// Neither role is ever checked: both submit paths succeed with whatever
/// credentials were typed. Two side actions bypass the form entirely:
/// skip login (straight to the catalog) and a registration opened with
/// no event attached.
#[component]
pub fn LoginPage() -> Element {
    let mut state = use_app_state();
    let mut login_type = use_signal(|| UserRole::Student);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let handle_login = move |_evt: FormEvent| {
        let credentials = Credentials {
            email: email(),
            password: password(),
        };
        state.login(login_type(), credentials);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Welcome to Event Hub" }
                }

                CardContent {
                    div { class: "auth-role-toggle",
                        for role in [UserRole::Student, UserRole::Admin] {
                            button {
                                r#type: "button",
                                class: "button auth-role-btn",
                                "data-style": if login_type() == role { "primary" } else { "secondary" },
                                onclick: move |_| login_type.set(role),
                                {role.display_name()}
                            }
                        }
                    }

                    Form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email",
                                Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                                "Email"
                            }
                            Input {
                                input_type: "email",
                                id: "email",
                                required: true,
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password",
                                Icon::<LdLock> { icon: LdLock, width: 14, height: 14 }
                                "Password"
                            }
                            Input {
                                input_type: "password",
                                id: "password",
                                required: true,
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "button auth-submit",
                            "data-style": "primary",
                            "Login"
                        }
                    }
                }

                CardFooter {
                    div { class: "auth-side-actions",
                        Separator {}
                        Button {
                            variant: ButtonVariant::Secondary,
                            onclick: move |_| state.open_registration(RegistrationTarget::General),
                            "New Registration"
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| state.skip_login(),
                            "Skip Login"
                        }
                    }
                }
            }
        }
    }
}
