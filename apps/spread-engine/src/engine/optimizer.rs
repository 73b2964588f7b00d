//! Optimization façade.
//!
//! Single entry point tying the pipeline together: validate the request,
//! narrow the table to the requested underlying, enumerate strike pairs per
//! group, price every candidate, and rank. Groups are independent, so
//! candidate construction fans out across them; the ranked merge is a
//! running max with a total tie-break, which keeps parallel runs
//! deterministic.

use rayon::prelude::*;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::{QuoteTable, SpreadCandidate, StrategyFilter};

use super::enumerator::group_quotes;
use super::error::EngineError;
use super::metrics::build_candidate;
use super::ranker::{RankedOutcome, rank};

fn default_min_risk_reward() -> Decimal {
    Decimal::ONE
}

/// Inputs for one optimization run.
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizationRequest {
    /// Underlying to evaluate.
    pub underlying: String,
    /// Current underlying price. Informational only; payoff math never
    /// touches it.
    pub spot_price: Decimal,
    /// Contracts per leg.
    pub quantity: u32,
    /// Flat operation fees applied once per spread.
    #[serde(default)]
    pub fees_total: Decimal,
    /// Which strategy kinds to evaluate.
    #[serde(default)]
    pub strategy_filter: StrategyFilter,
    /// Quality gate: minimum acceptable risk/reward ratio.
    #[serde(default = "default_min_risk_reward")]
    pub min_risk_reward: Decimal,
}

impl OptimizationRequest {
    fn validate(&self) -> Result<(), EngineError> {
        if self.quantity == 0 {
            return Err(EngineError::invalid_request("quantity must be positive"));
        }
        if self.spot_price <= Decimal::ZERO {
            return Err(EngineError::invalid_request("spot price must be positive"));
        }
        if self.fees_total < Decimal::ZERO {
            return Err(EngineError::invalid_request(
                "fees total must not be negative",
            ));
        }
        if self.min_risk_reward < Decimal::ZERO {
            return Err(EngineError::invalid_request(
                "minimum risk/reward must not be negative",
            ));
        }
        Ok(())
    }
}

/// Outcome of one optimization run.
#[derive(Debug, Clone, Copy)]
pub enum OptimizationResult<'a> {
    /// Best candidate clearing the quality gate.
    Qualified(SpreadCandidate<'a>),
    /// Best profitable candidate when none cleared the gate.
    BestUnqualified(SpreadCandidate<'a>),
    /// No profitable candidate existed among the evaluated pairs.
    NoneFound {
        /// How many candidates were evaluated before concluding.
        evaluated: usize,
    },
}

/// Evaluate every admissible spread for the request and pick the best.
///
/// Side-effect free: reads the table, returns a value, mutates nothing.
pub fn optimize<'a>(
    table: &'a QuoteTable,
    request: &OptimizationRequest,
) -> Result<OptimizationResult<'a>, EngineError> {
    request.validate()?;

    let quotes = table.for_underlying(&request.underlying);
    if quotes.is_empty() {
        return Err(EngineError::NoQuotesForUnderlying {
            underlying: request.underlying.clone(),
        });
    }

    let groups = group_quotes(&quotes);
    let kinds = request.strategy_filter.kinds();

    // Groups are independent; fan candidate construction out across them
    // and merge read-only at the ranking stage.
    let per_group: Vec<Vec<SpreadCandidate<'a>>> = groups
        .par_iter()
        .map(|group| {
            let mut out = Vec::new();
            for (low, high) in group.strike_pairs() {
                for kind in &kinds {
                    if kind.option_type() != group.option_type {
                        continue;
                    }
                    if let Some(candidate) =
                        build_candidate(*kind, low, high, request.quantity, request.fees_total)
                    {
                        out.push(candidate);
                    }
                }
            }
            out
        })
        .collect();
    let candidates: Vec<SpreadCandidate<'a>> = per_group.into_iter().flatten().collect();

    let evaluated = candidates.len();
    tracing::debug!(
        underlying = %request.underlying,
        groups = groups.len(),
        evaluated,
        "optimization run evaluated candidate set"
    );

    Ok(match rank(&candidates, request.min_risk_reward) {
        RankedOutcome::Qualified(best) => OptimizationResult::Qualified(best),
        RankedOutcome::BestUnqualified(best) => OptimizationResult::BestUnqualified(best),
        RankedOutcome::NoneViable => OptimizationResult::NoneFound { evaluated },
    })
}
