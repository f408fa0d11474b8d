use dioxus::prelude::*;

/// A centered modal overlay. Clicking the backdrop or the close button
/// invokes `on_close`; clicks inside the panel are swallowed.
#[component]
pub fn Dialog(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "dialog-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-panel",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Header section of a Dialog.
#[component]
pub fn DialogHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "dialog-header",
            ..attributes,
            {children}
        }
    }
}

/// Title element within a DialogHeader.
#[component]
pub fn DialogTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        h2 {
            class: "dialog-title",
            ..attributes,
            {children}
        }
    }
}

/// Description text within a DialogHeader.
#[component]
pub fn DialogDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        p {
            class: "dialog-description",
            ..attributes,
            {children}
        }
    }
}

/// Footer section of a Dialog, typically holding the action buttons.
#[component]
pub fn DialogFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "dialog-footer",
            ..attributes,
            {children}
        }
    }
}

/// Close button for a Dialog.
#[component]
pub fn DialogClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "dialog-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
        }
    }
}
