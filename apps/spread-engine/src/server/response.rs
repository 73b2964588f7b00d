//! HTTP response DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    LegDirection, NetGreeks, SpreadCandidate, SpreadMetrics, StrategyKind,
};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// One leg of a returned candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegResponse {
    /// Option ticker.
    pub ticker: String,
    /// Strike price.
    pub strike: Decimal,
    /// Premium per unit.
    pub premium: Decimal,
    /// Implied vol when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implied_vol: Option<Decimal>,
}

/// A chosen spread candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateResponse {
    /// Strategy kind.
    pub strategy: StrategyKind,
    /// The written leg.
    pub sold: LegResponse,
    /// The long leg.
    pub bought: LegResponse,
    /// Financial metrics under the request's cost model.
    pub metrics: SpreadMetrics,
    /// Signed net sensitivities; unknown components are omitted.
    pub net_greeks: NetGreeks,
}

impl CandidateResponse {
    /// Copy the fields an API client needs out of a borrowed candidate.
    #[must_use]
    pub fn from_candidate(candidate: &SpreadCandidate<'_>) -> Self {
        let leg = |quote: &crate::domain::OptionQuote| LegResponse {
            ticker: quote.ticker.clone(),
            strike: quote.strike,
            premium: quote.premium,
            implied_vol: quote.implied_vol,
        };
        debug_assert_eq!(candidate.sold.direction, LegDirection::Sold);

        Self {
            strategy: candidate.strategy,
            sold: leg(candidate.sold.quote),
            bought: leg(candidate.bought.quote),
            metrics: candidate.metrics,
            net_greeks: candidate.net_greeks,
        }
    }
}

/// Outcome tag for an optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizeOutcome {
    /// A candidate cleared the quality gate.
    Qualified,
    /// Best profitable candidate shown, but the gate was not met.
    BestUnqualified,
    /// Nothing profitable was found.
    NoneFound,
}

/// Response from `POST /api/v1/spreads/optimize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeSpreadResponse {
    /// Which of the three result states the run ended in.
    pub outcome: OptimizeOutcome,
    /// The chosen candidate for qualified/unqualified outcomes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best: Option<CandidateResponse>,
    /// Candidates evaluated before concluding nothing was viable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evaluated: Option<usize>,
    /// Rendered text report for the chosen candidate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<String>,
}

/// Response from `POST /api/v1/spreads/manual`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualSpreadResponse {
    /// Always the bear call credit shape.
    pub strategy: StrategyKind,
    /// Financial metrics under the per-contract cost model.
    pub metrics: SpreadMetrics,
    /// Implied vol of the sold leg, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sold_implied_vol: Option<Decimal>,
    /// Implied vol of the bought leg, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bought_implied_vol: Option<Decimal>,
    /// Rendered text report.
    pub report: String,
}

/// Structured error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code.
    pub code: String,
    /// Human-readable message.
    pub message: String,
}
