//! Manual single-spread entry point.
//!
//! For callers that already know their two legs: a bear call credit built
//! from user-declared strikes and premiums, bypassing the enumerator. The
//! cost model here is per-contract: fees are charged per leg, deducted from
//! the opening credit, and the flat fee amount also raises the realized
//! loss total.
//!
//! When a quote table is available the legs' implied vols are looked up by
//! strike and reported alongside the metrics; unknown stays unknown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{OptionType, QuoteTable, SpreadMetrics, StrategyKind};

use super::error::EngineError;

/// Caller-declared legs for a manual bear call credit.
#[derive(Debug, Clone, Deserialize)]
pub struct ManualSpreadInput {
    /// Underlying identifier.
    pub underlying: String,
    /// Current underlying price. Informational only.
    pub spot_price: Decimal,
    /// Strike of the written call. Must sit below the bought strike.
    pub sold_strike: Decimal,
    /// Premium received on the written call, per unit.
    pub sold_premium: Decimal,
    /// Strike of the long call.
    pub bought_strike: Decimal,
    /// Premium paid on the long call, per unit.
    pub bought_premium: Decimal,
    /// Contracts per leg.
    pub quantity: u32,
    /// Fees charged per contract leg.
    #[serde(default)]
    pub fees_per_leg: Decimal,
}

/// Result of a manual spread calculation.
#[derive(Debug, Clone, Serialize)]
pub struct ManualSpreadResult {
    /// Always the bear call credit shape.
    pub strategy: StrategyKind,
    /// Financial metrics under the per-contract cost model.
    pub metrics: SpreadMetrics,
    /// Implied vol of the sold leg, when the quote table knows it.
    pub sold_implied_vol: Option<Decimal>,
    /// Implied vol of the bought leg, when the quote table knows it.
    pub bought_implied_vol: Option<Decimal>,
}

/// Compute a bear call credit from caller-declared legs.
///
/// The shape precondition is checked before any computation: the sold
/// strike must be strictly below the bought strike.
pub fn bear_call_credit(
    input: &ManualSpreadInput,
    table: Option<&QuoteTable>,
) -> Result<ManualSpreadResult, EngineError> {
    if input.sold_strike >= input.bought_strike {
        return Err(EngineError::invalid_shape(
            "sold strike must be below bought strike for a bear call credit",
        ));
    }
    if input.quantity == 0 {
        return Err(EngineError::invalid_request("quantity must be positive"));
    }
    if input.fees_per_leg < Decimal::ZERO {
        return Err(EngineError::invalid_request(
            "fees per leg must not be negative",
        ));
    }

    let gross_credit = input.sold_premium - input.bought_premium;
    let fees_both_legs = input.fees_per_leg * Decimal::TWO;
    let net_credit = gross_credit - fees_both_legs;

    let width = input.bought_strike - input.sold_strike;
    let loss_unit = width - net_credit;

    let qty = Decimal::from(input.quantity);
    let max_profit_total = net_credit * qty;
    let max_loss_total = loss_unit * qty + fees_both_legs;
    let risk_reward = if max_loss_total > Decimal::ZERO {
        Some(max_profit_total / max_loss_total)
    } else {
        None
    };

    let metrics = SpreadMetrics {
        net_premium_per_unit: net_credit,
        max_profit_per_unit: net_credit,
        max_loss_per_unit: loss_unit,
        max_profit_total,
        max_loss_total,
        breakeven: input.sold_strike + net_credit,
        notional_total: width * qty,
        risk_reward,
    };

    let implied_vol = |strike: Decimal| {
        table
            .and_then(|t| t.find(&input.underlying, OptionType::Call, strike))
            .and_then(|quote| quote.implied_vol)
    };

    Ok(ManualSpreadResult {
        strategy: StrategyKind::BearCallCredit,
        metrics,
        sold_implied_vol: implied_vol(input.sold_strike),
        bought_implied_vol: implied_vol(input.bought_strike),
    })
}
