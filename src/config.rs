use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::utils::constants::API_BASE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub enable_logging: bool,
    /// Delay before re-login after a logout in default-credential mode
    pub relogin_delay_ms: u32,
    /// How long "Session Restored" stays on the status badge
    pub session_restored_ms: u32,
    pub default_auth: DefaultAuthConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/v1".to_string(),
            enable_logging: true,
            relogin_delay_ms: 500,
            session_restored_ms: 2000,
            default_auth: DefaultAuthConfig::default(),
        }
    }
}

/// Default-credential mode (`window.DEFAULT_AUTH`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultAuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl DefaultAuthConfig {
    pub fn enabled_with(username: &str, password: &str) -> Self {
        Self {
            enabled: true,
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        }
    }

    /// Username and password, both non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let username = self.username.as_deref().filter(|u| !u.is_empty())?;
        let password = self.password.as_deref().filter(|p| !p.is_empty())?;
        Some((username, password))
    }

    pub fn has_credentials(&self) -> bool {
        self.credentials().is_some()
    }

    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Self>(json) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("⚠️ [CONFIG] window.DEFAULT_AUTH is not valid: {}", e);
                None
            }
        }
    }

    /// Reads `window.DEFAULT_AUTH`, if the page defines it
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str("DEFAULT_AUTH")).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
        let json = js_sys::JSON::stringify(&value).ok()?.as_string()?;
        Self::from_json(&json)
    }
}

impl AppConfig {
    /// Loads the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self {
            api_base: API_BASE.trim_end_matches('/').to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            relogin_delay_ms: option_env!("RELOGIN_DELAY_MS")
                .unwrap_or("500").parse().unwrap_or(500),
            session_restored_ms: option_env!("SESSION_RESTORED_MS")
                .unwrap_or("2000").parse().unwrap_or(2000),
            default_auth: DefaultAuthConfig {
                enabled: option_env!("DEFAULT_AUTH")
                    .map(|v| v.eq_ignore_ascii_case("true"))
                    .unwrap_or(false),
                username: option_env!("DEFAULT_USERNAME").map(|s| s.to_string()),
                password: option_env!("DEFAULT_PASSWORD").map(|s| s.to_string()),
            },
        }
    }

    /// Default-credential settings in effect: the page's `window.DEFAULT_AUTH`
    /// wins over the build-time values.
    pub fn resolved_default_auth(&self) -> DefaultAuthConfig {
        DefaultAuthConfig::from_window().unwrap_or_else(|| self.default_auth.clone())
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
