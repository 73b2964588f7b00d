//! Runtime settings parsed from environment variables.
//!
//! # Environment Variables
//!
//! - `HTTP_PORT`: HTTP server port (default: 8080)
//! - `QUOTES_CSV`: path to the ingested option-chain CSV (default: `quotes.csv`)
//! - `DEFAULT_QUANTITY`: contracts per leg when a request omits it (default: 100)
//! - `DEFAULT_FEES_TOTAL`: flat fees per spread when omitted (default: 44.00)
//! - `DEFAULT_MIN_RISK_REWARD`: quality gate when omitted (default: 1.0)
//! - `RUST_LOG`: log filter (default: info)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that does not parse.
    #[error("Invalid value '{value}' for {var}")]
    InvalidValue {
        /// Variable name.
        var: String,
        /// The offending raw value.
        value: String,
    },
}

/// Request defaults applied when an API caller omits a field.
#[derive(Debug, Clone, Copy)]
pub struct EngineDefaults {
    /// Contracts per leg. The original system's standard lot.
    pub quantity: u32,
    /// Flat operation fees per spread.
    pub fees_total: Decimal,
    /// Minimum acceptable risk/reward ratio.
    pub min_risk_reward: Decimal,
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            quantity: 100,
            fees_total: dec!(44.00),
            min_risk_reward: dec!(1.0),
        }
    }
}

/// Parsed runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server port.
    pub http_port: u16,
    /// Path to the quote-table CSV loaded at startup.
    pub quotes_csv: PathBuf,
    /// Request defaults.
    pub defaults: EngineDefaults,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let read = |var: &str| std::env::var(var).ok();

        Ok(Self {
            http_port: parse_or("HTTP_PORT", read("HTTP_PORT").as_deref(), 8080)?,
            quotes_csv: read("QUOTES_CSV").map_or_else(|| PathBuf::from("quotes.csv"), PathBuf::from),
            defaults: EngineDefaults {
                quantity: parse_or(
                    "DEFAULT_QUANTITY",
                    read("DEFAULT_QUANTITY").as_deref(),
                    EngineDefaults::default().quantity,
                )?,
                fees_total: parse_or(
                    "DEFAULT_FEES_TOTAL",
                    read("DEFAULT_FEES_TOTAL").as_deref(),
                    EngineDefaults::default().fees_total,
                )?,
                min_risk_reward: parse_or(
                    "DEFAULT_MIN_RISK_REWARD",
                    read("DEFAULT_MIN_RISK_REWARD").as_deref(),
                    EngineDefaults::default().min_risk_reward,
                )?,
            },
        })
    }
}

/// Parse an optional raw value, falling back to a default when absent.
fn parse_or<T: FromStr>(var: &str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_fall_back_to_defaults() {
        assert_eq!(parse_or("HTTP_PORT", None, 8080u16).unwrap(), 8080);
        assert_eq!(
            parse_or("DEFAULT_FEES_TOTAL", None, dec!(44.00)).unwrap(),
            dec!(44.00)
        );
    }

    #[test]
    fn present_values_are_parsed() {
        assert_eq!(parse_or("HTTP_PORT", Some("9000"), 8080u16).unwrap(), 9000);
        assert_eq!(
            parse_or("DEFAULT_MIN_RISK_REWARD", Some("2.5"), dec!(1.0)).unwrap(),
            dec!(2.5)
        );
    }

    #[test]
    fn garbage_is_an_error() {
        let err = parse_or("HTTP_PORT", Some("not-a-port"), 8080u16).unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));
    }

    #[test]
    fn engine_defaults_match_the_standard_lot() {
        let defaults = EngineDefaults::default();
        assert_eq!(defaults.quantity, 100);
        assert_eq!(defaults.fees_total, dec!(44.00));
        assert_eq!(defaults.min_risk_reward, dec!(1.0));
    }
}
