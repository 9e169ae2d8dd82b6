//! Main application component

use std::rc::Rc;

use dioxus::prelude::*;

use alertdesk_core::indicator::IndicatorStore;
use alertdesk_core::{Organization, Project};

use crate::bootstrap_config::DesktopBootstrap;
use crate::components::{AlertSettingsPanel, IndicatorList};
use crate::plugins::default_registry;
use crate::services;
use crate::state::AppState;
use crate::theme::STYLESHEET;

/// Root application component
#[component]
pub fn App() -> Element {
    let bootstrap = use_context::<DesktopBootstrap>();

    // State signals
    let api = use_signal(|| {
        let config = bootstrap.config.as_ref().ok()?;
        services::connect(config)
            .map_err(|error| tracing::error!("Failed to build API client: {}", error))
            .ok()
    });
    let indicators = use_signal(IndicatorStore::new);
    let locale = use_signal(|| bootstrap.locale.clone());
    let plugins = use_signal(|| Rc::new(default_registry()));
    let mut panel_data = use_signal(|| None::<(Organization, Project)>);
    let mut load_error = use_signal(|| bootstrap.config.as_ref().err().cloned());
    let mut load_started = use_signal(|| false);

    let project_ref = bootstrap
        .config
        .as_ref()
        .ok()
        .map(alertdesk_core::config::ClientConfig::project_ref);

    // Load organization and project once; the panel owns them afterwards
    use_effect(move || {
        if load_started() {
            return;
        }
        load_started.set(true); // Mark immediately to prevent double load

        let Some(project_ref) = project_ref.clone() else {
            return;
        };
        let Some(client) = api.read().clone() else {
            load_error.set(Some("API client is not available.".to_string()));
            return;
        };

        spawn(async move {
            match services::load_panel_data(&client, &project_ref).await {
                Ok(data) => panel_data.set(Some(data)),
                Err(error) => {
                    tracing::error!("Failed to load project {}: {}", project_ref, error);
                    load_error.set(Some(error.to_string()));
                }
            }
        });
    });

    use_context_provider(|| AppState {
        api,
        indicators,
        locale,
        plugins,
    });

    let loading_text = locale.read().t("Loading project...");

    rsx! {
        style { {STYLESHEET} }

        div {
            class: "app-container",

            if let Some(error) = load_error() {
                div {
                    class: "app-error",
                    "{error}"
                }
            } else if let Some((organization, project)) = panel_data() {
                AlertSettingsPanel { organization, project }
            } else {
                div {
                    class: "app-status",
                    "{loading_text}"
                }
            }

            IndicatorList {}
        }
    }
}
