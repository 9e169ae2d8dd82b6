//! Application services
//!
//! Builds the project API client and loads the data the panel starts from.

use std::sync::Arc;

use alertdesk_core::api::{HttpTransport, ProjectApi};
use alertdesk_core::config::ClientConfig;
use alertdesk_core::{Organization, Project, ProjectRef};

/// Builds an API client over the default HTTP transport.
pub fn connect(config: &ClientConfig) -> alertdesk_core::Result<ProjectApi> {
    let transport = HttpTransport::from_config(config)?;
    tracing::info!("Using API at {}", transport.base_url());
    Ok(ProjectApi::new(Arc::new(transport)))
}

/// Fetches the organization and project once, at startup.
pub async fn load_panel_data(
    api: &ProjectApi,
    project: &ProjectRef,
) -> alertdesk_core::Result<(Organization, Project)> {
    let organization = api.fetch_organization(&project.organization).await?;
    let loaded = api.fetch_project(project).await?;
    tracing::info!(
        "Loaded project {} with {} plugins",
        project,
        loaded.plugins.len()
    );
    Ok((organization, loaded))
}
