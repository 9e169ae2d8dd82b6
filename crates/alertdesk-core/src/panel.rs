//! Alert settings panel state.
//!
//! Holds the organization and the current project snapshot. Every confirmed
//! change replaces the snapshot with a new `Arc<Project>`; nothing is edited
//! in place.
//!
//! A toggle runs as [`PendingToggle`]: it shows a progress indicator, sends
//! the request, then removes the indicator and adds an error toast on failure.

use std::sync::Arc;

use crate::api::{ApiError, Method, ProjectApi};
use crate::digest_form::SAVING_MESSAGE;
use crate::indicator::{IndicatorHandle, IndicatorKind, IndicatorStore};
use crate::models::{DigestSettings, Organization, Plugin, Project, ProjectRef};

pub const TOGGLE_FAILED_MESSAGE: &str = "Unable to save changes. Please try again.";

/// A plugin enable/disable request in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginToggle {
    pub plugin_id: String,
    pub enable: bool,
}

impl PluginToggle {
    pub const fn method(&self) -> Method {
        if self.enable {
            Method::Post
        } else {
            Method::Delete
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// Server confirmed; the snapshot now reflects the new flag.
    Applied,
    /// Request failed; the snapshot is unchanged.
    Failed(ApiError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSettings {
    organization: Organization,
    project: Arc<Project>,
}

impl AlertSettings {
    pub fn new(organization: Organization, project: Project) -> Self {
        Self {
            organization,
            project: Arc::new(project),
        }
    }

    pub const fn organization(&self) -> &Organization {
        &self.organization
    }

    pub const fn project(&self) -> &Arc<Project> {
        &self.project
    }

    pub fn project_ref(&self) -> ProjectRef {
        ProjectRef::new(&self.organization.slug, &self.project.slug)
    }

    /// Initial values for the digest form.
    pub fn digest_settings(&self) -> DigestSettings {
        self.project.digest_settings()
    }

    /// Applies digest values confirmed by the server.
    pub fn on_digests_change(&mut self, data: &DigestSettings) {
        self.project = Arc::new(self.project.with_digests(data));
    }

    /// Enabled notification plugins, rendered as settings blocks.
    pub fn enabled_plugins(&self) -> Vec<Plugin> {
        self.project
            .notification_plugins()
            .filter(|plugin| plugin.enabled)
            .cloned()
            .collect()
    }

    /// Disabled notification plugins, offered in the inactive list.
    pub fn inactive_plugins(&self) -> Vec<Plugin> {
        self.project
            .notification_plugins()
            .filter(|plugin| !plugin.enabled)
            .cloned()
            .collect()
    }

    /// Describes the request for toggling `plugin`. Toggles are not
    /// de-duplicated; each call yields an independent request.
    pub fn begin_toggle(&self, plugin: &Plugin, enable: bool) -> PluginToggle {
        tracing::debug!(
            "Toggling plugin {} for {} (enable={})",
            plugin.id,
            self.project_ref(),
            enable
        );
        PluginToggle {
            plugin_id: plugin.id.clone(),
            enable,
        }
    }

    /// Starts a toggle and shows the progress indicator for it.
    pub fn start_toggle(
        &self,
        plugin: &Plugin,
        enable: bool,
        indicators: &mut IndicatorStore,
    ) -> PendingToggle {
        let toggle = self.begin_toggle(plugin, enable);
        let indicator = indicators.add(SAVING_MESSAGE, IndicatorKind::Loading);
        PendingToggle {
            toggle,
            project: self.project_ref(),
            indicator,
        }
    }

    /// Applies a toggle response. A failure leaves the snapshot untouched.
    pub fn finish_toggle(
        &mut self,
        toggle: &PluginToggle,
        result: Result<(), ApiError>,
    ) -> ToggleOutcome {
        match result {
            Ok(()) => {
                self.project = Arc::new(
                    self.project
                        .with_plugin_enabled(&toggle.plugin_id, toggle.enable),
                );
                tracing::info!(
                    "Plugin {} {}",
                    toggle.plugin_id,
                    if toggle.enable { "enabled" } else { "disabled" }
                );
                ToggleOutcome::Applied
            }
            Err(error) => {
                tracing::warn!("Failed to toggle plugin {}: {}", toggle.plugin_id, error);
                ToggleOutcome::Failed(error)
            }
        }
    }
}

/// One plugin toggle in flight.
#[derive(Debug)]
pub struct PendingToggle {
    toggle: PluginToggle,
    project: ProjectRef,
    indicator: IndicatorHandle,
}

impl PendingToggle {
    pub const fn toggle(&self) -> &PluginToggle {
        &self.toggle
    }

    pub async fn send(&self, api: &ProjectApi) -> Result<(), ApiError> {
        api.set_plugin_enabled(&self.project, &self.toggle.plugin_id, self.toggle.enable)
            .await
    }

    /// Removes the progress indicator, applies the response and, on failure,
    /// adds the [`TOGGLE_FAILED_MESSAGE`] error indicator.
    pub fn finish(
        self,
        settings: &mut AlertSettings,
        indicators: &mut IndicatorStore,
        result: Result<(), ApiError>,
    ) -> ToggleOutcome {
        indicators.remove(self.indicator);
        let outcome = settings.finish_toggle(&self.toggle, result);
        if matches!(outcome, ToggleOutcome::Failed(_)) {
            indicators.add(TOGGLE_FAILED_MESSAGE, IndicatorKind::Error);
        }
        outcome
    }
}

/// Runs a whole toggle: indicator, request, snapshot update, error toast.
pub async fn toggle_plugin(
    api: &ProjectApi,
    settings: &mut AlertSettings,
    plugin: &Plugin,
    enable: bool,
    indicators: &mut IndicatorStore,
) -> ToggleOutcome {
    let pending = settings.start_toggle(plugin, enable, indicators);
    let result = pending.send(api).await;
    pending.finish(settings, indicators, result)
}
