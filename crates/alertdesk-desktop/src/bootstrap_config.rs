//! Desktop bootstrap configuration loaded from the environment.

use std::path::PathBuf;

use alertdesk_core::config::{ClientConfig, ENV_LOCALE_FILE};
use alertdesk_core::locale::Locale;
use alertdesk_core::util::non_blank;

/// Everything the shell needs before the first render.
///
/// A broken client configuration does not stop the app; the error is kept
/// and shown in place of the settings panel.
#[derive(Debug, Clone)]
pub struct DesktopBootstrap {
    pub config: Result<ClientConfig, String>,
    pub locale: Locale,
}

pub fn load_bootstrap() -> DesktopBootstrap {
    let config = ClientConfig::from_env().map_err(|error| error.to_string());
    DesktopBootstrap {
        config,
        locale: load_locale(std::env::var(ENV_LOCALE_FILE).ok()),
    }
}

/// Loads the locale catalog named by `path`, falling back to English.
fn load_locale(path: Option<String>) -> Locale {
    let Some(path) = non_blank(path).map(PathBuf::from) else {
        return Locale::english();
    };
    Locale::load(&path).unwrap_or_else(|error| {
        tracing::warn!("Failed to load locale catalog: {}", error);
        Locale::english()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_locale_file_falls_back_to_english() {
        assert_eq!(load_locale(None), Locale::english());
        assert_eq!(load_locale(Some("  ".to_string())), Locale::english());
        assert_eq!(
            load_locale(Some("/nonexistent/alertdesk-locale.json".to_string())),
            Locale::english()
        );
    }
}
