//! alertdesk-core - Core library for Alertdesk
//!
//! This crate contains the shared models, the project API client, and the
//! UI-agnostic state behind the alert settings panel (digest form, plugin
//! toggles, indicators, and plugin renderer resolution).

pub mod api;
pub mod config;
pub mod digest_form;
pub mod error;
pub mod indicator;
pub mod locale;
pub mod models;
pub mod panel;
pub mod plugins;
pub mod range;
pub mod util;

pub use error::{Error, Result};
pub use models::{DigestSettings, Organization, Plugin, Project, ProjectRef};
