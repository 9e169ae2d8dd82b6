//! Organization and project models

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DigestSettings, Plugin};

/// Organization owning a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub slug: String,
    #[serde(default)]
    pub name: String,
}

/// Identifies a project resource by organization and project slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectRef {
    pub organization: String,
    pub project: String,
}

impl ProjectRef {
    pub fn new(organization: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            project: project.into(),
        }
    }

    /// API path of the project resource: `/projects/{org}/{project}/`.
    pub fn resource_path(&self) -> String {
        format!(
            "/projects/{}/{}/",
            urlencoding::encode(&self.organization),
            urlencoding::encode(&self.project)
        )
    }

    /// API path toggling one plugin: `/projects/{org}/{project}/plugins/{id}/`.
    pub fn plugin_path(&self, plugin_id: &str) -> String {
        format!(
            "{}plugins/{}/",
            self.resource_path(),
            urlencoding::encode(plugin_id)
        )
    }

    /// Dashboard route of the alert settings tab.
    pub fn alert_settings_route(&self) -> String {
        format!("{}settings/alerts/", self.dashboard_root())
    }

    /// Dashboard route of the alert rules tab.
    pub fn alert_rules_route(&self) -> String {
        format!("{}settings/alerts/rules/", self.dashboard_root())
    }

    /// Dashboard route for creating a new alert rule.
    pub fn new_alert_rule_route(&self) -> String {
        format!("{}settings/alerts/new/", self.dashboard_root())
    }

    fn dashboard_root(&self) -> String {
        format!(
            "/{}/{}/",
            urlencoding::encode(&self.organization),
            urlencoding::encode(&self.project)
        )
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}/{}", self.organization, self.project)
    }
}

/// A project as returned by the project resource.
///
/// Updates never mutate a project in place; `with_*` methods return a new
/// snapshot so any other holder of the previous value keeps seeing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    #[serde(default)]
    pub name: String,
    pub digests_min_delay: u32,
    pub digests_max_delay: u32,
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

impl Project {
    /// Current digest values, used to seed the digest form.
    pub const fn digest_settings(&self) -> DigestSettings {
        DigestSettings::new(self.digests_min_delay, self.digests_max_delay)
    }

    /// Returns a snapshot with the confirmed digest values applied.
    ///
    /// Fields absent from `digests` keep their current value.
    #[must_use]
    pub fn with_digests(&self, digests: &DigestSettings) -> Self {
        Self {
            digests_min_delay: digests.digests_min_delay.unwrap_or(self.digests_min_delay),
            digests_max_delay: digests.digests_max_delay.unwrap_or(self.digests_max_delay),
            ..self.clone()
        }
    }

    /// Returns a snapshot where only the plugin with `plugin_id` has its
    /// `enabled` flag set to `enabled`.
    #[must_use]
    pub fn with_plugin_enabled(&self, plugin_id: &str, enabled: bool) -> Self {
        let plugins = self
            .plugins
            .iter()
            .map(|plugin| {
                if plugin.id == plugin_id {
                    Plugin {
                        enabled,
                        ..plugin.clone()
                    }
                } else {
                    plugin.clone()
                }
            })
            .collect();
        Self {
            plugins,
            ..self.clone()
        }
    }

    pub fn plugin(&self, plugin_id: &str) -> Option<&Plugin> {
        self.plugins.iter().find(|plugin| plugin.id == plugin_id)
    }

    /// Plugins with the `notification` type, in project order.
    pub fn notification_plugins(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.iter().filter(|plugin| plugin.is_notification())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn plugin(id: &str, kind: &str, enabled: bool) -> Plugin {
        Plugin {
            id: id.to_string(),
            name: id.to_uppercase(),
            kind: kind.to_string(),
            enabled,
            can_disable: true,
        }
    }

    fn project() -> Project {
        Project {
            slug: "frontend".to_string(),
            name: "Frontend".to_string(),
            digests_min_delay: 300,
            digests_max_delay: 3600,
            plugins: vec![
                plugin("mail", "notification", true),
                plugin("webhooks", "notification", false),
                plugin("github", "issue-tracking", false),
            ],
        }
    }

    #[test]
    fn resource_paths() {
        let project = ProjectRef::new("acme", "frontend");
        assert_eq!(project.resource_path(), "/projects/acme/frontend/");
        assert_eq!(
            project.plugin_path("webhooks"),
            "/projects/acme/frontend/plugins/webhooks/"
        );
    }

    #[test]
    fn path_segments_are_encoded() {
        let project = ProjectRef::new("acme corp", "front/end");
        assert_eq!(project.resource_path(), "/projects/acme%20corp/front%2Fend/");
    }

    #[test]
    fn dashboard_routes() {
        let project = ProjectRef::new("acme", "frontend");
        assert_eq!(project.alert_settings_route(), "/acme/frontend/settings/alerts/");
        assert_eq!(
            project.alert_rules_route(),
            "/acme/frontend/settings/alerts/rules/"
        );
        assert_eq!(
            project.new_alert_rule_route(),
            "/acme/frontend/settings/alerts/new/"
        );
    }

    #[test]
    fn with_plugin_enabled_touches_only_matching_plugin() {
        let before = project();
        let after = before.with_plugin_enabled("webhooks", true);

        assert!(after.plugin("webhooks").unwrap().enabled);
        assert!(after.plugin("mail").unwrap().enabled);
        assert!(!after.plugin("github").unwrap().enabled);
        // previous snapshot is untouched
        assert!(!before.plugin("webhooks").unwrap().enabled);
    }

    #[test]
    fn with_plugin_enabled_ignores_unknown_id() {
        let before = project();
        assert_eq!(before.with_plugin_enabled("missing", true), before);
    }

    #[test]
    fn with_digests_replaces_both_fields() {
        let after = project().with_digests(&DigestSettings::new(120, 600));
        assert_eq!(after.digest_settings(), DigestSettings::new(120, 600));
        assert_eq!(after.plugins, project().plugins);
    }

    #[test]
    fn notification_plugins_filters_by_type() {
        let project = project();
        let ids: Vec<_> = project
            .notification_plugins()
            .map(|plugin| plugin.id.as_str())
            .collect();
        assert_eq!(ids, vec!["mail", "webhooks"]);
    }

    #[test]
    fn deserializes_project_payload() {
        let payload = r#"{
            "slug": "frontend",
            "name": "Frontend",
            "digestsMinDelay": 300,
            "digestsMaxDelay": 3600,
            "plugins": [
                {"id": "mail", "name": "Mail", "type": "notification", "enabled": true, "canDisable": false}
            ],
            "team": {"slug": "web"}
        }"#;
        let parsed: Project = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed.digests_max_delay, 3600);
        assert_eq!(parsed.plugins.len(), 1);
    }
}
