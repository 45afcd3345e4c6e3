// Editable amount field; shows the canonical digits with id-ID grouping
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::toolbar::Toolbar;
use crate::config::theme::ThemePalette;
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn AmountInput() -> Element {
    let config = use_context::<AppConfig>();
    let palette = use_context::<ThemePalette>();
    let mut app_state = use_context::<Signal<AppState>>();

    // Re-rendered from the canonical digits, so typed separators never survive a keystroke.
    let display = app_state.read().input_display();

    rsx! {
        label {
            style: "display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 0.5rem;",
            "{config.app.input_label}"
        }
        div {
            style: "display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem;",
            input {
                r#type: "text",
                aria_label: "{config.app.input_aria_label}",
                value: "{display}",
                placeholder: "{config.app.input_placeholder}",
                autofocus: true,
                style: "flex: 1; padding: 0.75rem; border: 1px solid {palette.border}; border-radius: 0.5rem; outline-color: {palette.focus_ring}; background-color: {palette.surface}; color: {palette.foreground};",
                oninput: move |evt: FormEvent| {
                    app_state.write().edit(&evt.value());
                },
            }
            Toolbar {}
        }
    }
}
