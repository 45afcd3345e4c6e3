use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid rate {rate} for '{key}': rates must be finite and non-negative")]
    InvalidRate { key: &'static str, rate: f64 },

    #[error("Settings JSON error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
