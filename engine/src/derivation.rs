// Derivation engine: percentage-based values computed from one canonical amount.
use serde::{Deserialize, Serialize};
use shared::models::{ResultKey, ResultSet};

use crate::error::{EngineError, Result};

/// Multipliers applied to the canonical amount, one per derived result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    pub p11: f64,
    pub p16: f64,
    pub p5: f64,
    pub minus5: f64,
    pub plus10: f64,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            p11: 0.11,
            p16: 0.16,
            p5: 0.05,
            minus5: 0.95,
            plus10: 1.10,
        }
    }
}

impl RateTable {
    /// `Original` is the identity.
    pub fn rate(&self, key: ResultKey) -> f64 {
        match key {
            ResultKey::Original => 1.0,
            ResultKey::P11 => self.p11,
            ResultKey::P16 => self.p16,
            ResultKey::P5 => self.p5,
            ResultKey::Minus5 => self.minus5,
            ResultKey::Plus10 => self.plus10,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for key in ResultKey::ALL {
            let rate = self.rate(key);
            if !rate.is_finite() || rate < 0.0 {
                return Err(EngineError::InvalidRate { key: key.as_str(), rate });
            }
        }
        Ok(())
    }
}

/// `round(value * rate)`, computed in f64 and rounded half away from zero.
///
/// For non-negative amounts this is the same as round-half-up, so ties like 10 * 0.05 = 0.5 give 1.
/// Products past `u64::MAX` saturate.
pub fn apply_rate(value: u64, rate: f64) -> u64 {
    (value as f64 * rate).round() as u64
}

pub fn derive(value: u64) -> ResultSet {
    derive_with(value, &RateTable::default())
}

pub fn derive_with(value: u64, rates: &RateTable) -> ResultSet {
    ResultSet {
        original: value,
        p11: apply_rate(value, rates.p11),
        p16: apply_rate(value, rates.p16),
        p5: apply_rate(value, rates.p5),
        minus5: apply_rate(value, rates.minus5),
        plus10: apply_rate(value, rates.plus10),
    }
}

/// Remembers the last derivation, keyed by the amount it was computed for.
#[derive(Debug, Clone, Default)]
pub struct DerivationCache {
    last: Option<(u64, ResultSet)>,
}

impl DerivationCache {
    pub fn get_or_derive(&mut self, value: u64, rates: &RateTable) -> ResultSet {
        match self.last {
            Some((cached_value, results)) if cached_value == value => results,
            _ => {
                let results = derive_with(value, rates);
                self.last = Some((value, results));
                results
            }
        }
    }
}
