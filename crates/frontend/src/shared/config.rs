//! Controller configuration
//!
//! Defaults are embedded in the crate. A page may override any subset of
//! fields with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="quantum-pixel-config">
//!   { "loading_message": "Working..." }
//! </script>
//! ```

use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::JsCast;

/// Id of the inline override block
pub const CONFIG_ELEMENT_ID: &str = "quantum-pixel-config";

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
{
    "tabs_headers_id": "tabs-headers",
    "tabs_panels_id": "tabs-panels",
    "tab_button_class": "tab-btn",
    "tab_panel_class": "tab-panel",
    "form_class": "panel-controls",
    "result_id": "result",
    "active_class": "active",
    "target_attribute": "data-target",
    "loading_message": "Loading, please wait patiently.",
    "remove_prefix": "/remove",
    "confirm_on_leave": true,
    "log_level": "debug"
}
"#;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ControllerConfig {
    pub tabs_headers_id: String,
    pub tabs_panels_id: String,
    pub tab_button_class: String,
    pub tab_panel_class: String,
    /// Forms intercepted on the encode page
    pub form_class: String,
    /// Id of the result element inside each panel
    pub result_id: String,
    pub active_class: String,
    /// Header attribute naming its panel id
    pub target_attribute: String,
    /// Text shown in the result element while a submission is in flight
    pub loading_message: String,
    pub remove_prefix: String,
    /// Call `preventDefault` on `beforeunload` (asks the browser to confirm leaving)
    pub confirm_on_leave: bool,
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        // Covered by test_default_config_loads
        Self::from_json("{}").expect("embedded default config is valid")
    }
}

impl ControllerConfig {
    /// Parse a (possibly partial) JSON override; missing fields keep the
    /// embedded defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut merged: Value = serde_json::from_str(DEFAULT_CONFIG)?;
        let overrides: Value = serde_json::from_str(raw)?;

        match (&mut merged, overrides) {
            (Value::Object(base), Value::Object(fields)) => base.extend(fields),
            _ => return Err(serde::de::Error::custom("config must be a JSON object")),
        }

        serde_json::from_value(merged)
    }

    /// Unknown level names fall back to `Debug`.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }

    /// `.tab-btn`
    pub fn tab_button_selector(&self) -> String {
        format!(".{}", self.tab_button_class)
    }

    /// `.tab-panel`
    pub fn tab_panel_selector(&self) -> String {
        format!(".{}", self.tab_panel_class)
    }

    /// `.panel-controls`
    pub fn form_selector(&self) -> String {
        format!(".{}", self.form_class)
    }

    // `.tab-btn.active` (orphaned doc line; method body absent in source)
}

/// Load configuration for the current page
///
/// Search order:
/// 1. Inline `<script id="quantum-pixel-config">` block
/// 2. Falls back to embedded default config
///
/// Runs before the logger is installed, so problems are reported through
/// the returned warning instead of `log`.
pub fn load_config() -> (ControllerConfig, Option<String>) {
    let inline = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlScriptElement>().ok())
        .and_then(|script| script.text().ok());

    let Some(raw) = inline else {
        return (ControllerConfig::default(), None);
    };

    match ControllerConfig::from_json(&raw) {
        Ok(config) => (config, None),
        Err(e) => (
            ControllerConfig::default(),
            Some(format!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e)),
        ),
    }
}
