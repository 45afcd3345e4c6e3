pub mod models;
pub mod utils;

// Types and formatting shared by the derivation engine and the GUI.
// Nothing here holds state; the calculator state lives in `engine::calculator`.

pub use models::{CalculatorSnapshot, ResultKey, ResultSet};
pub use utils::indonesian_format::CurrencyFormat;
