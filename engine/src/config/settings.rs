// Engine settings, deserialized from the `engine` section of the application config
use serde::{Deserialize, Serialize};
use shared::utils::indonesian_format::CurrencyFormat;

use crate::derivation::RateTable;
use crate::error::{EngineError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub rates: RateTable,
    pub currency: CurrencyFormat,
}

impl Default for EngineSettings {
    fn default() -> Self {
        // Indonesian Rupiah, whole units only
        EngineSettings {
            rates: RateTable::default(),
            currency: CurrencyFormat::default(),
        }
    }
}

impl EngineSettings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: EngineSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.rates.validate()?;
        if self.currency.symbol.trim().is_empty() {
            return Err(EngineError::ConfigError("currency symbol must not be empty".to_string()));
        }
        if self.currency.grouping_separator.chars().any(|c| c.is_ascii_digit()) {
            return Err(EngineError::ConfigError(format!(
                "grouping separator '{}' must not contain digits",
                self.currency.grouping_separator
            )));
        }
        Ok(())
    }
}
