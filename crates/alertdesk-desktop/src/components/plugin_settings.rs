//! Plugin settings box component

use std::sync::Arc;

use dioxus::prelude::*;

use alertdesk_core::plugins::PluginContext;
use alertdesk_core::{Organization, Plugin, Project};

use super::settings_box::SettingsBox;
use crate::state::{t, AppState};

/// Settings block of one enabled plugin. The body comes from the plugin
/// registry; a Disable action is offered only when the plugin allows it.
#[component]
pub(super) fn PluginSettingsBox(
    organization: Organization,
    project: Arc<Project>,
    plugin: Plugin,
    on_disable: EventHandler<Plugin>,
) -> Element {
    let state = use_context::<AppState>();
    let registry = state.plugins.read().clone();
    let body = registry.render_settings(PluginContext {
        organization: &organization,
        project: &project,
        plugin: &plugin,
    });

    let actions = plugin.can_disable.then(|| {
        let disable_label = t("Disable");
        let plugin = plugin.clone();
        rsx! {
            button {
                class: "btn btn-sm",
                r#type: "button",
                onclick: move |_| on_disable.call(plugin.clone()),
                "{disable_label}"
            }
        }
    });

    rsx! {
        SettingsBox {
            title: plugin.name.clone(),
            actions,
            {body}
        }
    }
}
