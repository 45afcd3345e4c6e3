// GUI configuration module
pub mod theme; // Light and dark palettes for the inline styles

// Mirrors the structure of assets/config/default.json
use anyhow::{bail, Context};
use engine::config::settings::EngineSettings;
use serde::Deserialize;
use shared::models::ResultKey;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineSettings,
    pub layout: LayoutConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    pub footer: String,
    pub input_label: String,
    pub input_aria_label: String,
    pub input_placeholder: String,
    pub theme: String, // "dark" or "light"
    pub window_width: u32,
    pub window_height: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LayoutConfig {
    pub cards: Vec<CardConfig>,
}

/// One bordered section of the results grid.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CardConfig {
    #[serde(default)]
    pub wide: bool, // spans both grid columns
    pub rows: Vec<RowConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RowConfig {
    pub label: String,
    pub key: ResultKey,
}

impl AppConfig {
    // The default config is embedded at build time; locale and rates are not user-configurable.
    pub fn load_default() -> anyhow::Result<Self> {
        let config_str = include_str!("../../assets/config/default.json"); // Path relative to this .rs file
        Self::from_json(config_str)
    }

    pub fn from_json(config_str: &str) -> anyhow::Result<Self> {
        let config: AppConfig = serde_json::from_str(config_str).context("Failed to parse application config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        self.engine.validate().context("Invalid engine settings")?;
        if self.layout.cards.iter().any(|card| card.rows.is_empty()) {
            bail!("Layout cards must have at least one row");
        }
        if self.app.window_width == 0 || self.app.window_height == 0 {
            bail!(
                "Window size {}x{} is not usable",
                self.app.window_width,
                self.app.window_height
            );
        }
        Ok(())
    }
}
