//! Data models for Alertdesk

mod digest;
mod plugin;
mod project;

pub use digest::{DigestField, DigestSettings};
pub use plugin::{Plugin, NOTIFICATION_PLUGIN_TYPE};
pub use project::{Organization, Project, ProjectRef};
