use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
const SETTINGS_KEY: &str = "settings";

/// Base URL of the remote JSON store, fixed at build time through `FINANCE_API_URL`.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("FINANCE_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Display preferences kept in the browser's local storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub currency_code: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            currency_code: "KGS".to_string(),
        }
    }
}

impl AppSettings {
    fn from_stored(raw: Option<&str>) -> Self {
        raw.and_then(|raw| serde_json::from_str::<AppSettings>(raw).ok())
            .filter(|settings| !settings.currency_code.trim().is_empty())
            .unwrap_or_default()
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_settings() -> AppSettings {
    let raw = local_storage().and_then(|storage| storage.get_item(SETTINGS_KEY).ok().flatten());
    AppSettings::from_stored(raw.as_deref())
}

pub fn save_settings(settings: &AppSettings) {
    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable, settings not saved");
        return;
    };

    match serde_json::to_string(settings) {
        Ok(raw) => {
            if storage.set_item(SETTINGS_KEY, &raw).is_err() {
                log::warn!("could not write settings to local storage");
            }
        }
        Err(e) => log::error!("could not serialize settings: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        assert_eq!(
            normalize_base_url("https://tracker.example.com/ "),
            "https://tracker.example.com"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_BASE_URL), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn missing_or_broken_settings_fall_back_to_defaults() {
        assert_eq!(AppSettings::from_stored(None), AppSettings::default());
        assert_eq!(AppSettings::from_stored(Some("{oops")), AppSettings::default());
        assert_eq!(
            AppSettings::from_stored(Some(r#"{"currency_code":"  "}"#)),
            AppSettings::default()
        );
    }

    #[test]
    fn stored_settings_are_used() {
        let settings = AppSettings::from_stored(Some(r#"{"currency_code":"USD"}"#));

        assert_eq!(settings.currency_code, "USD");
    }
}
