//! Page configuration
//!
//! One component covers both page layouts: the classic one (large logo, no
//! caption) and the enhanced one (smaller logo, caption under the buttons).
//! A page may override any field with a JSON block:
//!
//! ```html
//! <script type="application/json" id="perform-config">
//!   { "show_description": false, "logo_max_px": 180 }
//! </script>
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::{
    HOST_INPUT_PLACEHOLDER, POLL_INTERVAL_MS, REPLACEMENT_PLACEHOLDER, STORAGE_KEY,
};
use crate::error::Result;

/// Element id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "perform-config";

/// Selector and page settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Show the caption describing the selected mode
    pub show_description: bool,

    // === Logo ===
    pub logo_path: String,
    pub logo_alt: String,
    /// Max width and height of the logo (px)
    pub logo_max_px: u32,

    // === Host page contract ===
    /// Container the header is prepended into (falls back to `body`)
    pub container_selector: String,
    /// Placeholder identifying the host chat input
    pub input_placeholder: String,
    /// Placeholder written once the input is wired
    pub replacement_placeholder: String,
    /// Discovery probe interval (ms)
    pub poll_interval_ms: u32,

    /// LocalStorage key for the selected mode
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_description: true,

            logo_path: "/public/logo_dark.png".to_string(),
            logo_alt: "Perform Assistant Logo".to_string(),
            logo_max_px: 120,

            container_selector: "main".to_string(),
            input_placeholder: HOST_INPUT_PLACEHOLDER.to_string(),
            replacement_placeholder: REPLACEMENT_PLACEHOLDER.to_string(),
            poll_interval_ms: POLL_INTERVAL_MS,

            storage_key: STORAGE_KEY.to_string(),
        }
    }
}

impl Config {
    /// Classic layout: large logo, no caption
    pub fn classic() -> Self {
        Self {
            show_description: false,
            logo_max_px: 180,
            ..Self::default()
        }
    }

    /// Parse overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// CSS selector matching the host chat input
    pub fn input_selector(&self) -> String {
        let escaped = self
            .input_placeholder
            .replace('\\', "\\\\")
            .replace('"', "\\\"");
        format!("input[placeholder=\"{}\"]", escaped)
    }

    /// Load configuration from the page's JSON block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        if let Some(json) = json {
            match Self::from_json(&json) {
                Ok(config) => {
                    log::info!("Loaded page configuration");
                    return config;
                }
                Err(e) => log::warn!("{}; using defaults", e),
            }
        }

        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
