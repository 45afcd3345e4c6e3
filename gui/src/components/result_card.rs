// Read-only card showing one or more labelled Rupiah amounts
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::config::theme::ThemePalette;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub label: String,
    pub value: String,
}

#[component]
pub fn ResultCard(rows: Vec<DisplayRow>, wide: bool) -> Element {
    let palette = use_context::<ThemePalette>();
    let span = if wide { "grid-column: span 2;" } else { "" };

    rsx! {
        section {
            style: "{span} padding: 1rem; border: 1px solid {palette.border}; border-radius: 0.5rem;",
            for row in rows {
                div { style: "font-size: 0.75rem; color: {palette.muted};", "{row.label}" }
                div { style: "margin-top: 0.5rem; font-size: 1.125rem; font-weight: 500;", "{row.value}" }
            }
        }
    }
}
