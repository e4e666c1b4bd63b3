//! Client Configuration
//!
//! Defaults can be overridden by the hosting page through
//! `<meta name="focus-flow-config" content='{"api_base": "..."}'>`.

use serde::Deserialize;
use wasm_bindgen::JsCast;

const CONFIG_META_NAME: &str = "focus-flow-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix of every REST route, without trailing slash
    pub api_base: String,
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    /// Browser storage key of the theme preference
    pub theme_storage_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/v1".to_string(),
            toast_duration_ms: 3000,
            theme_storage_key: "todo-theme".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: AppConfig = serde_json::from_str(json)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Read the config meta tag, falling back to defaults
    pub fn from_page() -> Self {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME)).ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
            .map(|meta| meta.content());

        match content {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                tracing::warn!("ignoring malformed {} meta tag: {}", CONFIG_META_NAME, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
