// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Context;
use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state; // Calculator state shared through a signal

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Rupiah calculator (Dioxus Desktop)...");

    // The embedded default config is the only source of locale, rates and layout.
    let app_config = AppConfig::load_default().context("Failed to load default configuration")?;
    tracing::info!(
        "Loaded configuration version {} ({} / {}).",
        app_config.version,
        app_config.engine.currency.locale,
        app_config.engine.currency.currency_code
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(app_config.app.window_width, app_config.app.window_height)),
    );

    // AppConfig becomes a root context; App derives the theme and calculator state from it.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Rupiah calculator finished.");
    Ok(())
}
