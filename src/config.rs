use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "waveguide.config";

#[cfg(not(target_arch = "wasm32"))]
const CONFIG_ENV: &str = "WAVEGUIDE_CONFIG";
#[cfg(not(target_arch = "wasm32"))]
const API_BASE_ENV: &str = "WAVEGUIDE_API_BASE";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Client settings. Every field has a default so partial overrides work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend origin; empty means "same origin as the page".
    #[serde(default)]
    pub api_base: String,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_search_retries")]
    pub search_retries: u32,
    #[serde(default = "default_retry_interval_ms")]
    pub retry_interval_ms: u64,
    /// Where an expired session is sent to sign in again.
    #[serde(default = "default_entry_path")]
    pub entry_path: String,
    #[serde(default = "default_logout_path")]
    pub logout_path: String,
}

fn default_debounce_ms() -> u64 {
    350
}

fn default_search_retries() -> u32 {
    2
}

fn default_retry_interval_ms() -> u64 {
    1000
}

fn default_entry_path() -> String {
    "/".to_string()
}

fn default_logout_path() -> String {
    "/log_out".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            debounce_ms: default_debounce_ms(),
            search_retries: default_search_retries(),
            retry_interval_ms: default_retry_interval_ms(),
            entry_path: default_entry_path(),
            logout_path: default_logout_path(),
        }
    }
}

impl AppConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> AppConfig {
    let mut config = match LocalStorage::get::<AppConfig>(CONFIG_KEY) {
        Ok(config) => config,
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => AppConfig::default(),
        Err(err) => {
            tracing::warn!(%err, "ignoring unreadable stored config");
            AppConfig::default()
        }
    };

    if config.api_base.is_empty() {
        config.api_base = page_origin().unwrap_or_default();
    }
    config
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> AppConfig {
    let raw = std::env::var(CONFIG_ENV).ok();
    let base = std::env::var(API_BASE_ENV).ok();
    config_from_overrides(raw.as_deref(), base.as_deref())
}

/// Defaults, then the JSON override, then the base URL override.
#[cfg(not(target_arch = "wasm32"))]
fn config_from_overrides(raw: Option<&str>, base: Option<&str>) -> AppConfig {
    let mut config = match raw {
        Some(raw) => AppConfig::from_json(raw).unwrap_or_else(|err| {
            tracing::warn!(%err, var = CONFIG_ENV, "ignoring malformed config override");
            AppConfig::default()
        }),
        None => AppConfig::default(),
    };

    if let Some(base) = base.filter(|v| !v.trim().is_empty()) {
        config.api_base = base.to_string();
    }
    if config.api_base.is_empty() {
        config.api_base = DEFAULT_API_BASE.to_string();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"debounce_ms": 500}"#).unwrap();
        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.search_retries, 2);
        assert_eq!(config.retry_interval_ms, 1000);
        assert_eq!(config.entry_path, "/");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn malformed_override_falls_back_to_defaults() {
        let config = config_from_overrides(Some("{not json"), None);
        assert_eq!(
            config,
            AppConfig {
                api_base: DEFAULT_API_BASE.to_string(),
                ..AppConfig::default()
            }
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn blank_base_override_is_ignored() {
        let config = config_from_overrides(
            Some(r#"{"api_base": "http://backend:8080", "search_retries": 0}"#),
            Some("   "),
        );
        assert_eq!(config.api_base, "http://backend:8080");
        assert_eq!(config.search_retries, 0);

        let config = config_from_overrides(None, Some("http://override:9000"));
        assert_eq!(config.api_base, "http://override:9000");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn missing_base_gets_the_local_default() {
        let config = config_from_overrides(None, None);
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.debounce_ms, 350);
        assert_eq!(config.logout_path, "/log_out");
    }
}
