use serde::{Deserialize, Serialize};

use super::ui::SHORT_TOAST_MS;

/// Top-level shell settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellSettings {
    /// Origin of the hosted web app, without trailing slash.
    pub base_url: String,
    /// Feature tag opened when none is given on the command line.
    pub default_feature: String,
    pub toast_duration_ms: u64,
    pub window: WindowSettings,
    pub devtools: bool,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            base_url: "https://alphaedge.streamlit.app".to_string(),
            default_feature: "dashboard".to_string(),
            toast_duration_ms: SHORT_TOAST_MS,
            window: WindowSettings::default(),
            devtools: false,
        }
    }
}

/// Initial window geometry, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowSettings {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self { width: 420.0, height: 860.0 }
    }
}
