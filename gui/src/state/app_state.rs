// Global application state for the GUI
// Wraps the engine's calculator so every UI event goes through the same
// sanitize -> derive pipeline. Provided to components as a Dioxus `Signal<AppState>`;
// writing to the signal re-renders the input and the result cards.

use engine::config::settings::EngineSettings;
use engine::Calculator;
use shared::models::ResultSet;
use shared::utils::indonesian_format::CurrencyFormat;

#[derive(Debug, Clone)]
pub struct AppState {
    calculator: Calculator,
    currency: CurrencyFormat,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&EngineSettings::default())
    }
}

impl AppState {
    pub fn new(settings: &EngineSettings) -> Self {
        Self {
            calculator: Calculator::new(settings.rates),
            currency: settings.currency.clone(),
        }
    }

    pub fn edit(&mut self, text: &str) {
        self.calculator.edit(text);
    }

    pub fn reset(&mut self) {
        self.calculator.reset();
        tracing::info!("Calculator reset");
    }

    pub fn append_zeros(&mut self) {
        self.calculator.append_zeros();
    }

    /// Grouped digits for the editable field; blank until something is typed.
    pub fn input_display(&self) -> String {
        self.currency.format_input(self.calculator.raw_digits())
    }

    pub fn results(&self) -> ResultSet {
        *self.calculator.results()
    }
}
