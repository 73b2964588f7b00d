//! Option sensitivities (Greeks) with explicit unknowns.
//!
//! Every component is independently optional: a feed that carries delta but
//! not vega is common, and an absent value must never be mistaken for an
//! exact zero. Unknowns propagate through netting and are simply omitted
//! from downstream ranking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-unit sensitivities for a single quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteGreeks {
    /// Delta - rate of change of option price with underlying price.
    pub delta: Option<Decimal>,
    /// Gamma - rate of change of delta with underlying price.
    pub gamma: Option<Decimal>,
    /// Theta - time decay per day.
    pub theta: Option<Decimal>,
    /// Vega - sensitivity to implied volatility.
    pub vega: Option<Decimal>,
}

impl QuoteGreeks {
    /// Create fully-known Greeks.
    #[must_use]
    pub const fn new(delta: Decimal, gamma: Decimal, theta: Decimal, vega: Decimal) -> Self {
        Self {
            delta: Some(delta),
            gamma: Some(gamma),
            theta: Some(theta),
            vega: Some(vega),
        }
    }

    /// Whether every component is known.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.delta.is_some() && self.gamma.is_some() && self.theta.is_some() && self.vega.is_some()
    }
}

/// Signed net sensitivities of a two-leg position.
///
/// A component is `None` whenever either leg's value is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetGreeks {
    /// Net delta.
    pub delta: Option<Decimal>,
    /// Net gamma.
    pub gamma: Option<Decimal>,
    /// Net theta.
    pub theta: Option<Decimal>,
    /// Net vega.
    pub vega: Option<Decimal>,
}

impl NetGreeks {
    /// Component-wise `lhs - rhs`; unknown on either side stays unknown.
    #[must_use]
    pub fn difference(lhs: &QuoteGreeks, rhs: &QuoteGreeks) -> Self {
        fn sub(a: Option<Decimal>, b: Option<Decimal>) -> Option<Decimal> {
            match (a, b) {
                (Some(a), Some(b)) => Some(a - b),
                _ => None,
            }
        }

        Self {
            delta: sub(lhs.delta, rhs.delta),
            gamma: sub(lhs.gamma, rhs.gamma),
            theta: sub(lhs.theta, rhs.theta),
            vega: sub(lhs.vega, rhs.vega),
        }
    }

    /// Whether every component is known.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.delta.is_some() && self.gamma.is_some() && self.theta.is_some() && self.vega.is_some()
    }
}
