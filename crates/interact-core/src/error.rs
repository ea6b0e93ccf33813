// File: crates/interact-core/src/error.rs
// Summary: Typed errors for candle construction and controller configuration.
// Pointer resolution and the interaction state machine are total and never return these.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CandleError {
    #[error("low {low} above min(open, close) {body_low}")]
    LowAboveBody { low: f64, body_low: f64 },
    #[error("high {high} below max(open, close) {body_high}")]
    HighBelowBody { high: f64, body_high: f64 },
    #[error("low {low} above high {high}")]
    LowAboveHigh { low: f64, high: f64 },
    #[error("non-finite value in candle at t={t}")]
    NonFinite { t: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read controller config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid controller config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    Color(String),
}
