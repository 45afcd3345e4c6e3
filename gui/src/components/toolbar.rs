// Reset and "+000" controls next to the amount field
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;
use crate::state::app_state::AppState;

#[component]
pub fn Toolbar() -> Element {
    let palette = use_context::<ThemePalette>();
    let mut app_state = use_context::<Signal<AppState>>();
    let button_style = format!(
        "padding: 0.5rem 0.75rem; background-color: {}; color: {}; border: none; border-radius: 0.5rem; font-size: 0.875rem; cursor: pointer;",
        palette.button, palette.foreground
    );

    rsx! {
        button {
            r#type: "button",
            style: "{button_style}",
            onclick: move |_| app_state.write().reset(),
            "Reset"
        }
        button {
            r#type: "button",
            style: "{button_style}",
            onclick: move |_| app_state.write().append_zeros(),
            "+000"
        }
    }
}
