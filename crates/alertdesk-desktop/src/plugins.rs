//! Plugin settings renderers for the desktop shell.

use std::sync::Arc;

use dioxus::prelude::*;

use alertdesk_core::plugins::{PluginContext, PluginRegistry, PluginRenderer};

use crate::state::{minutes_label, t};

/// Renders plugins that ship no dedicated settings view.
pub struct DefaultPlugin;

impl PluginRenderer<Element> for DefaultPlugin {
    fn name(&self) -> &str {
        "DefaultPlugin"
    }

    fn render_settings(&self, context: PluginContext<'_>) -> Element {
        let plugin = context.plugin;
        let project = context.project;
        let summary = t("This integration is enabled and has no additional settings here.");
        let scope = format!("{} / {}", context.organization.slug, project.slug);
        rsx! {
            div {
                class: "plugin-default",
                p { "{summary}" }
                div {
                    class: "plugin-meta",
                    span { class: "plugin-id", "{plugin.id}" }
                    span { class: "plugin-scope", "{scope}" }
                }
            }
        }
    }
}

/// Renders the mail plugin, which delivers digests.
pub struct MailPlugin;

impl PluginRenderer<Element> for MailPlugin {
    fn name(&self) -> &str {
        "MailPlugin"
    }

    fn render_settings(&self, context: PluginContext<'_>) -> Element {
        let project = context.project;
        let summary = t("Issue alerts for this project are delivered by email, batched into digests.");
        let window = format!(
            "{} - {}",
            minutes_label(project.digests_min_delay),
            minutes_label(project.digests_max_delay)
        );
        rsx! {
            div {
                class: "plugin-default",
                p { "{summary}" }
                div {
                    class: "plugin-meta",
                    span { "{window}" }
                }
            }
        }
    }
}

/// Registry used by the app: dedicated renderers plus the default fallback.
pub fn default_registry() -> PluginRegistry<Element> {
    PluginRegistry::new(Arc::new(DefaultPlugin)).with("mail", Arc::new(MailPlugin))
}
