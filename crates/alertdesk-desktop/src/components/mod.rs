//! UI Components
//!
//! Components making up the alert settings panel.

mod alert_settings;
mod digest_settings;
mod inactive_plugins;
mod indicators;
mod plugin_settings;
mod range_field;
mod settings_box;
#[cfg(test)]
mod testing;

pub use alert_settings::AlertSettingsPanel;
pub use indicators::IndicatorList;
