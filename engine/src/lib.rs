// Engine library root
// Sanitizing, deriving and holding the calculator state; no UI code lives here.

pub mod calculator;
pub mod config;
pub mod derivation;
pub mod error;
pub mod input;

pub use calculator::Calculator;
pub use derivation::{derive, derive_with, RateTable};
pub use error::EngineError;
pub use input::sanitize;
