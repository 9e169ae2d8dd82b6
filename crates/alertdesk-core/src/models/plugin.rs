//! Project plugin model

use serde::{Deserialize, Serialize};

/// Plugin category tag for notification integrations.
pub const NOTIFICATION_PLUGIN_TYPE: &str = "notification";

/// A pluggable integration attached to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Unique plugin identifier (e.g. `webhooks`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Category tag (e.g. `notification`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the plugin is enabled for the project
    pub enabled: bool,
    /// Whether the user may disable the plugin
    #[serde(default)]
    pub can_disable: bool,
}

impl Plugin {
    /// Whether this plugin delivers notifications.
    pub fn is_notification(&self) -> bool {
        self.kind == NOTIFICATION_PLUGIN_TYPE
    }
}
