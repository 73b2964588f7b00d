//! Option quote types and the quote table.
//!
//! Quotes arrive already normalized by the ingestion layer: strikes and
//! premiums share one currency unit, option types are CALL/PUT, and missing
//! sensitivities are absent rather than zeroed.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::greeks::QuoteGreeks;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptionType {
    /// Call option (right to buy).
    Call,
    /// Put option (right to sell).
    Put,
}

impl OptionType {
    /// Parse a normalized type string (`CALL` / `PUT`, any case).
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "CALL" => Some(Self::Call),
            "PUT" => Some(Self::Put),
            _ => None,
        }
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Call => write!(f, "Call"),
            Self::Put => write!(f, "Put"),
        }
    }
}

/// One market quote for an exchange-traded option.
///
/// Immutable once ingested; the engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Underlying identifier (e.g. `BOVA11`).
    pub underlying: String,
    /// Option ticker (e.g. `BOVAJ134W4`).
    pub ticker: String,
    /// Option type (call/put).
    pub option_type: OptionType,
    /// Strike price. Invariant: positive.
    pub strike: Decimal,
    /// Premium in quote currency per unit. Never negative.
    pub premium: Decimal,
    /// Implied volatility as a decimal fraction, when known.
    pub implied_vol: Option<Decimal>,
    /// Per-unit sensitivities, each independently optional.
    pub greeks: QuoteGreeks,
    /// Expiration date, when known.
    pub expiry: Option<NaiveDate>,
    /// Business days until expiry, when known.
    pub days_to_expiry: Option<u32>,
}

/// Normalized collection of option quotes for one or more underlyings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteTable {
    quotes: Vec<OptionQuote>,
}

impl QuoteTable {
    /// Create a table from already-normalized quotes.
    #[must_use]
    pub fn new(quotes: Vec<OptionQuote>) -> Self {
        Self { quotes }
    }

    /// All quotes.
    #[must_use]
    pub fn quotes(&self) -> &[OptionQuote] {
        &self.quotes
    }

    /// Number of quotes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the table holds no quotes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Quotes for one underlying, matched case-insensitively.
    #[must_use]
    pub fn for_underlying(&self, underlying: &str) -> Vec<&OptionQuote> {
        self.quotes
            .iter()
            .filter(|q| q.underlying.eq_ignore_ascii_case(underlying))
            .collect()
    }

    /// First quote matching (underlying, type, strike), if any.
    ///
    /// Used by the manual entry point to recover implied vol for
    /// caller-declared legs.
    #[must_use]
    pub fn find(
        &self,
        underlying: &str,
        option_type: OptionType,
        strike: Decimal,
    ) -> Option<&OptionQuote> {
        self.quotes.iter().find(|q| {
            q.underlying.eq_ignore_ascii_case(underlying)
                && q.option_type == option_type
                && q.strike == strike
        })
    }
}
