//! Application state management
//!
//! Global state accessible via Dioxus context providers.

use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;

use alertdesk_core::api::ProjectApi;
use alertdesk_core::indicator::{IndicatorStore, ERROR_DISPLAY};
use alertdesk_core::locale::Locale;
use alertdesk_core::plugins::PluginRegistry;
use alertdesk_core::range::format_minutes;

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Project API client, if the client configuration is valid
    pub api: Signal<Option<ProjectApi>>,
    /// Visible progress and error indicators
    pub indicators: Signal<IndicatorStore>,
    /// UI string catalog
    pub locale: Signal<Locale>,
    /// Renderers for enabled plugins' settings blocks
    pub plugins: Signal<Rc<PluginRegistry<Element>>>,
}

impl AppState {
    /// Removes expired error toasts once they have been on screen long
    /// enough. Call after an operation reported a failure.
    pub fn expire_errors_later(&self) {
        let mut indicators = self.indicators;
        spawn(async move {
            tokio::time::sleep(ERROR_DISPLAY).await;
            indicators.write().prune_expired(Instant::now());
        });
    }

    pub fn t(&self, key: &str) -> String {
        self.locale.read().t(key)
    }
}

/// Translates `key` with the app locale, or returns it unchanged when no
/// app state is in scope.
pub fn t(key: &str) -> String {
    try_consume_context::<AppState>().map_or_else(|| key.to_string(), |state| state.t(key))
}

/// Formats a slider value with the app locale.
pub fn minutes_label(seconds: u32) -> String {
    try_consume_context::<AppState>().map_or_else(
        || format_minutes(&Locale::english(), seconds),
        |state| format_minutes(&state.locale.read(), seconds),
    )
}
