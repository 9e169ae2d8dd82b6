//! Settings box component

use dioxus::prelude::*;

/// Titled box wrapping one settings section.
#[component]
pub(super) fn SettingsBox(
    #[props(into)] title: String,
    /// Controls shown on the right of the header
    actions: Option<Element>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "box",

            div {
                class: "box-header",
                h3 { "{title}" }
                if let Some(actions) = actions {
                    div {
                        class: "box-actions",
                        {actions}
                    }
                }
            }
            div {
                class: "box-content",
                {children}
            }
        }
    }
}
