//! Alert settings panel component

use dioxus::prelude::*;

use alertdesk_core::api::ApiError;
use alertdesk_core::panel::{AlertSettings, ToggleOutcome};
use alertdesk_core::{DigestSettings, Organization, Plugin, Project};

use super::digest_settings::DigestSettingsForm;
use super::inactive_plugins::InactivePlugins;
use super::plugin_settings::PluginSettingsBox;
use crate::state::{t, AppState};

/// Project alert settings: digest frequency, enabled integrations and the
/// list of inactive ones.
#[component]
pub fn AlertSettingsPanel(organization: Organization, project: Project) -> Element {
    let state = use_context::<AppState>();
    let panel = use_signal(|| AlertSettings::new(organization, project));

    let toggle_plugin = move |plugin: Plugin, enable: bool| {
        let mut indicators = state.indicators;
        let pending = panel
            .read()
            .start_toggle(&plugin, enable, &mut indicators.write());
        let api = state.api.read().clone();
        let mut panel_signal = panel;
        spawn(async move {
            let result = match api {
                Some(api) => pending.send(&api).await,
                None => Err(ApiError::transport("API client is not configured")),
            };
            let outcome = pending.finish(&mut panel_signal.write(), &mut indicators.write(), result);
            if matches!(outcome, ToggleOutcome::Failed(_)) {
                state.expire_errors_later();
            }
        });
    };

    let snapshot = panel.read().clone();
    let project_ref = snapshot.project_ref();
    let organization = snapshot.organization().clone();
    let project = snapshot.project().clone();
    let enabled_plugins = snapshot.enabled_plugins();
    let inactive_plugins = snapshot.inactive_plugins();

    let title = t("Alerts");
    let new_rule_label = t("New Alert Rule");
    let settings_label = t("Settings");
    let rules_label = t("Rules");
    let new_rule_route = project_ref.new_alert_rule_route();
    let settings_route = project_ref.alert_settings_route();
    let rules_route = project_ref.alert_rules_route();

    rsx! {
        div {
            class: "alert-settings",

            div {
                class: "panel-header",
                a {
                    class: "btn btn-primary btn-sm",
                    href: "{new_rule_route}",
                    "{new_rule_label}"
                }
                h2 { "{title}" }
            }

            ul {
                class: "nav-tabs",
                li {
                    class: "active",
                    a { href: "{settings_route}", "{settings_label}" }
                }
                li {
                    a { href: "{rules_route}", "{rules_label}" }
                }
            }

            DigestSettingsForm {
                project: project_ref.clone(),
                initial: snapshot.digest_settings(),
                on_save: move |saved: DigestSettings| {
                    let mut panel_signal = panel;
                    panel_signal.write().on_digests_change(&saved);
                },
            }

            for plugin in enabled_plugins {
                PluginSettingsBox {
                    key: "{plugin.id}",
                    organization: organization.clone(),
                    project: project.clone(),
                    plugin: plugin.clone(),
                    on_disable: move |plugin: Plugin| toggle_plugin(plugin, false),
                }
            }

            InactivePlugins {
                plugins: inactive_plugins,
                on_enable_plugin: move |(plugin, enable): (Plugin, bool)| toggle_plugin(plugin, enable),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::testing::{render, WithAppState};

    fn plugin(id: &str, name: &str, kind: &str, enabled: bool, can_disable: bool) -> Plugin {
        Plugin {
            id: id.to_string(),
            name: name.to_string(),
            kind: kind.to_string(),
            enabled,
            can_disable,
        }
    }

    fn fixtures() -> (Organization, Project) {
        let organization = Organization {
            slug: "acme".to_string(),
            name: "Acme".to_string(),
        };
        let project = Project {
            slug: "frontend".to_string(),
            name: "Frontend".to_string(),
            digests_min_delay: 300,
            digests_max_delay: 3600,
            plugins: vec![
                plugin("mail", "Mail", "notification", true, false),
                plugin("webhooks", "WebHooks", "notification", true, true),
                plugin("slack", "Slack", "notification", false, true),
                plugin("github", "GitHub", "issue-tracking", true, true),
            ],
        };
        (organization, project)
    }

    fn render_panel() -> String {
        render(|| {
            let (organization, project) = fixtures();
            rsx! {
                WithAppState {
                    AlertSettingsPanel { organization, project }
                }
            }
        })
    }

    #[test]
    fn renders_header_and_tabs() {
        let html = render_panel();
        assert!(html.contains("Alerts"), "{html}");
        assert!(html.contains(r#"href="/acme/frontend/settings/alerts/new/""#), "{html}");
        assert!(html.contains(r#"href="/acme/frontend/settings/alerts/rules/""#), "{html}");
        assert!(html.contains("Digests"), "{html}");
    }

    #[test]
    fn only_notification_plugins_are_listed() {
        let html = render_panel();
        assert!(html.contains("Mail"), "{html}");
        assert!(html.contains("WebHooks"), "{html}");
        assert!(html.contains("Slack"), "{html}");
        assert!(!html.contains("GitHub"), "{html}");
    }

    #[test]
    fn disable_offered_only_for_disableable_plugins() {
        let html = render_panel();
        // webhooks can be disabled, mail cannot
        assert_eq!(html.matches(">Disable<").count(), 1, "{html}");
    }

    #[test]
    fn inactive_list_holds_disabled_plugins() {
        let html = render_panel();
        assert!(html.contains("Inactive Integrations"), "{html}");
        assert_eq!(html.matches("<li").count(), 3, "two tabs and one inactive plugin: {html}");
    }
}
