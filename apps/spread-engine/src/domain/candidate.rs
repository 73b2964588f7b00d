//! Constructed spread candidates.
//!
//! A candidate's legs are views into the quote table, never owned copies;
//! candidates are built transiently during enumeration, ranked, and only
//! the retained best survives the run.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::greeks::NetGreeks;
use super::quote::OptionQuote;
use super::strategy::StrategyKind;

/// Direction of one leg of a spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LegDirection {
    /// The leg is written (premium received).
    Sold,
    /// The leg is held long (premium paid).
    Bought,
}

/// A reference to one quote plus its direction in the spread.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpreadLeg<'a> {
    /// The underlying quote.
    pub quote: &'a OptionQuote,
    /// Sold or bought.
    pub direction: LegDirection,
}

impl<'a> SpreadLeg<'a> {
    /// Create a sold leg.
    #[must_use]
    pub const fn sold(quote: &'a OptionQuote) -> Self {
        Self {
            quote,
            direction: LegDirection::Sold,
        }
    }

    /// Create a bought leg.
    #[must_use]
    pub const fn bought(quote: &'a OptionQuote) -> Self {
        Self {
            quote,
            direction: LegDirection::Bought,
        }
    }

    /// Strike of the referenced quote.
    #[must_use]
    pub fn strike(&self) -> Decimal {
        self.quote.strike
    }

    /// Premium of the referenced quote.
    #[must_use]
    pub fn premium(&self) -> Decimal {
        self.quote.premium
    }
}

/// Financial metrics of one spread, per unit and scaled to the request.
///
/// `net_premium_per_unit` is signed: positive is a credit received at open,
/// negative a debit paid. `risk_reward` is absent when the loss total is
/// non-positive; such candidates never enter ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadMetrics {
    /// Signed opening premium per unit (positive = credit).
    pub net_premium_per_unit: Decimal,
    /// Best-case gain per unit, before quantity scaling and fees.
    pub max_profit_per_unit: Decimal,
    /// Worst-case loss per unit, before quantity scaling and fees.
    pub max_loss_per_unit: Decimal,
    /// Best-case gain for the whole position, net of fees.
    pub max_profit_total: Decimal,
    /// Worst-case loss for the whole position, fees included.
    pub max_loss_total: Decimal,
    /// Underlying price at expiry where the position breaks even.
    pub breakeven: Decimal,
    /// Strike width times quantity: the exposure scale of the position.
    pub notional_total: Decimal,
    /// `max_profit_total / max_loss_total`, defined only for positive risk.
    pub risk_reward: Option<Decimal>,
}

/// A constructed two-leg vertical spread candidate.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpreadCandidate<'a> {
    /// Strategy kind the candidate was built for.
    pub strategy: StrategyKind,
    /// The written leg.
    pub sold: SpreadLeg<'a>,
    /// The long leg.
    pub bought: SpreadLeg<'a>,
    /// Financial metrics under the request's cost model.
    pub metrics: SpreadMetrics,
    /// Signed net sensitivities; unknown components stay unknown.
    pub net_greeks: NetGreeks,
}

impl SpreadCandidate<'_> {
    /// Risk/reward ratio, when defined.
    #[must_use]
    pub fn risk_reward(&self) -> Option<Decimal> {
        self.metrics.risk_reward
    }

    /// Strike of the sold leg (the deterministic final tie-break key).
    #[must_use]
    pub fn sold_strike(&self) -> Decimal {
        self.sold.strike()
    }
}
