//! HTTP request DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::StrategyFilter;

/// Body for `POST /api/v1/spreads/optimize`.
///
/// Omitted cost-model fields fall back to the configured defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeSpreadRequest {
    /// Underlying to evaluate.
    pub underlying: String,
    /// Current underlying price.
    pub spot_price: Decimal,
    /// Contracts per leg; defaults to the configured standard lot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    /// Flat fees per spread; defaults to the configured total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fees_total: Option<Decimal>,
    /// Strategy kinds to evaluate; defaults to all four verticals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_filter: Option<StrategyFilter>,
    /// Quality gate; defaults to the configured minimum ratio.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_risk_reward: Option<Decimal>,
}

/// Body for `POST /api/v1/spreads/manual`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualSpreadRequest {
    /// Underlying identifier.
    pub underlying: String,
    /// Current underlying price.
    pub spot_price: Decimal,
    /// Strike of the written call.
    pub sold_strike: Decimal,
    /// Premium received per unit.
    pub sold_premium: Decimal,
    /// Strike of the long call.
    pub bought_strike: Decimal,
    /// Premium paid per unit.
    pub bought_premium: Decimal,
    /// Contracts per leg.
    pub quantity: u32,
    /// Fees charged per contract leg.
    #[serde(default)]
    pub fees_per_leg: Decimal,
}
