use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    /// Start in dark mode.
    #[serde(default)]
    pub dark: bool,
    /// Hex color overrides for the dark palette ("#RRGGBB"), keyed by
    /// theme field name.
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Hex color overrides for the light palette.
    #[serde(default)]
    pub light_colors: HashMap<String, String>,
}
