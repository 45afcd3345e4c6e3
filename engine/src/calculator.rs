//! Calculator state machine.
//!
//! The state is a [`CalculatorSnapshot`] whose canonical digit string is the only input. Each
//! transition replaces the digits and then recomputes value and results before returning, so
//! readers never see a stale [`ResultSet`].

use shared::models::{CalculatorSnapshot, ResultSet};
use tracing::debug;

use crate::derivation::{DerivationCache, RateTable};
use crate::input::{parse_canonical, sanitize};

/// Digits appended by the "+000" control.
pub const THOUSANDS_SUFFIX: &str = "000";

#[derive(Debug, Clone)]
pub struct Calculator {
    state: CalculatorSnapshot,
    rates: RateTable,
    cache: DerivationCache,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(RateTable::default())
    }
}

impl Calculator {
    pub fn new(rates: RateTable) -> Self {
        let mut calculator = Self {
            state: CalculatorSnapshot::default(),
            rates,
            cache: DerivationCache::default(),
        };
        calculator.recompute();
        calculator
    }

    /// Replaces the amount with the digits found in `text`.
    pub fn edit(&mut self, text: &str) -> &ResultSet {
        self.state.raw_digits = sanitize(text);
        self.recompute()
    }

    pub fn reset(&mut self) -> &ResultSet {
        self.state.raw_digits.clear();
        self.recompute()
    }

    /// Multiplies the amount by 1000 by appending three zeros.
    ///
    /// On an empty amount this yields "000", i.e. value 0 rather than 1000.
    pub fn append_zeros(&mut self) -> &ResultSet {
        self.state.raw_digits.push_str(THOUSANDS_SUFFIX);
        self.recompute()
    }

    pub fn raw_digits(&self) -> &str {
        &self.state.raw_digits
    }

    pub fn value(&self) -> u64 {
        self.state.value
    }

    pub fn results(&self) -> &ResultSet {
        &self.state.results
    }

    pub fn snapshot(&self) -> &CalculatorSnapshot {
        &self.state
    }

    fn recompute(&mut self) -> &ResultSet {
        self.state.value = parse_canonical(&self.state.raw_digits);
        self.state.results = self.cache.get_or_derive(self.state.value, &self.rates);
        debug!(snapshot = ?self.state, "Recomputed calculator state");
        &self.state.results
    }
}
