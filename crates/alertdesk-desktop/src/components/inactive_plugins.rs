//! Inactive integrations component

use dioxus::prelude::*;

use alertdesk_core::Plugin;

use super::settings_box::SettingsBox;
use crate::state::t;

/// Disabled notification integrations, each with an enable button.
#[component]
pub(super) fn InactivePlugins(
    plugins: Vec<Plugin>,
    on_enable_plugin: EventHandler<(Plugin, bool)>,
) -> Element {
    if plugins.is_empty() {
        return rsx! {};
    }

    rsx! {
        SettingsBox {
            title: t("Inactive Integrations"),

            ul {
                class: "integration-list",
                for plugin in plugins {
                    li {
                        key: "{plugin.id}",
                        button {
                            class: "btn btn-sm",
                            r#type: "button",
                            onclick: {
                                let plugin = plugin.clone();
                                move |_| on_enable_plugin.call((plugin.clone(), true))
                            },
                            "{plugin.name}"
                        }
                    }
                }
            }
        }
    }
}
