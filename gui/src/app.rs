#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::amount_input::AmountInput;
use crate::components::result_grid::ResultGrid;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    // AppConfig is provided by the launcher in main.rs
    let config = use_context::<AppConfig>();
    let palette = use_context_provider(|| ThemePalette::for_name(&config.app.theme));
    use_context_provider(|| Signal::new(AppState::new(&config.engine)));

    rsx! {
        div {
            style: "min-height: 100vh; padding: 1.5rem; background-color: {palette.background}; font-family: system-ui, sans-serif;",
            div {
                style: "max-width: 42rem; margin: 0 auto; padding: 1.5rem; background-color: {palette.surface}; color: {palette.foreground}; border-radius: 1rem; box-shadow: 0 10px 15px rgba(0,0,0,0.1);",
                h1 { style: "font-size: 1.5rem; font-weight: 600; margin: 0 0 1rem 0;", "{config.app.title}" }
                AmountInput {}
                ResultGrid {}
                footer { style: "margin-top: 1.5rem; font-size: 0.875rem; color: {palette.muted};", "{config.app.footer}" }
            }
        }
    }
}
