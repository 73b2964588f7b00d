//! Vertical spread strategy kinds.
//!
//! The four two-leg verticals form a closed set. Which strike is sold and
//! which is bought, the sign of the opening premium, and the breakeven
//! anchor all follow from the kind, so the assignment lives in one resolver
//! here instead of four parallel code paths.

use serde::{Deserialize, Serialize};

use super::quote::OptionType;

/// Credit or debit nature of a spread at open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadNature {
    /// Net premium received when opening.
    Credit,
    /// Net premium paid when opening.
    Debit,
}

/// The four vertical spread strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Bull call spread: buy the low call, sell the high call (debit).
    BullCallDebit,
    /// Bear call spread: sell the low call, buy the high call (credit).
    BearCallCredit,
    /// Bull put spread: sell the high put, buy the low put (credit).
    BullPutCredit,
    /// Bear put spread: buy the high put, sell the low put (debit).
    BearPutDebit,
}

/// All strategy kinds, in a fixed evaluation order.
pub const ALL_STRATEGIES: [StrategyKind; 4] = [
    StrategyKind::BullCallDebit,
    StrategyKind::BearCallCredit,
    StrategyKind::BullPutCredit,
    StrategyKind::BearPutDebit,
];

impl StrategyKind {
    /// Option type this strategy is built from.
    #[must_use]
    pub const fn option_type(&self) -> OptionType {
        match self {
            Self::BullCallDebit | Self::BearCallCredit => OptionType::Call,
            Self::BullPutCredit | Self::BearPutDebit => OptionType::Put,
        }
    }

    /// Credit or debit at open.
    #[must_use]
    pub const fn nature(&self) -> SpreadNature {
        match self {
            Self::BearCallCredit | Self::BullPutCredit => SpreadNature::Credit,
            Self::BullCallDebit | Self::BearPutDebit => SpreadNature::Debit,
        }
    }

    /// Whether the lower-strike leg is the sold leg.
    ///
    /// The other leg of the pair is always the bought leg.
    #[must_use]
    pub const fn sells_low_strike(&self) -> bool {
        match self {
            // Bear call sells the low call; bear put sells the low put.
            Self::BearCallCredit | Self::BearPutDebit => true,
            // Bull call buys the low call; bull put sells the high put.
            Self::BullCallDebit | Self::BullPutCredit => false,
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BullCallDebit => write!(f, "Bull Call Spread (Debit)"),
            Self::BearCallCredit => write!(f, "Bear Call Spread (Credit)"),
            Self::BullPutCredit => write!(f, "Bull Put Spread (Credit)"),
            Self::BearPutDebit => write!(f, "Bear Put Spread (Debit)"),
        }
    }
}

/// Which strategy kinds a request wants evaluated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyFilter {
    /// Evaluate all four verticals.
    #[default]
    All,
    /// Evaluate only the listed kinds.
    Only(Vec<StrategyKind>),
}

impl StrategyFilter {
    /// Whether the filter admits a kind.
    #[must_use]
    pub fn allows(&self, kind: StrategyKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(kinds) => kinds.contains(&kind),
        }
    }

    /// Kinds admitted by this filter, in evaluation order.
    #[must_use]
    pub fn kinds(&self) -> Vec<StrategyKind> {
        ALL_STRATEGIES
            .into_iter()
            .filter(|kind| self.allows(*kind))
            .collect()
    }
}
