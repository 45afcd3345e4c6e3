// Two-column grid of result cards, laid out from the `layout` section of the config
#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::result_card::{DisplayRow, ResultCard};
use crate::config::{AppConfig, CardConfig};
use crate::state::app_state::AppState;
use shared::models::ResultSet;
use shared::utils::indonesian_format::CurrencyFormat;

/// Formats every row of every card against one result set.
pub fn card_rows(cards: &[CardConfig], results: &ResultSet, currency: &CurrencyFormat) -> Vec<Vec<DisplayRow>> {
    cards
        .iter()
        .map(|card| {
            card.rows
                .iter()
                .map(|row| DisplayRow {
                    label: row.label.clone(),
                    value: currency.format_currency(results.get(row.key)),
                })
                .collect()
        })
        .collect()
}

#[component]
pub fn ResultGrid() -> Element {
    let config = use_context::<AppConfig>();
    let app_state = use_context::<Signal<AppState>>();
    // The memo is the only subscription to the calculator, so edits that keep the value
    // ("" -> "000") do not re-render the cards.
    let results = use_memo(move || app_state.read().results());

    let rows = card_rows(&config.layout.cards, &results.read(), &config.engine.currency);

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 1rem;",
            for (idx, (card, card_display)) in config.layout.cards.iter().zip(rows).enumerate() {
                ResultCard { key: "{idx}", rows: card_display, wide: card.wide }
            }
        }
    }
}
