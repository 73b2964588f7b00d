//! Net Greeks for a two-leg position.

use crate::domain::{NetGreeks, QuoteGreeks, SpreadNature, StrategyKind};

/// Signed net sensitivities for a spread.
///
/// Credit spreads sell the inner leg, so the net position reads
/// sold − bought; debit spreads read bought − sold. A component missing on
/// either leg stays unknown in the result.
#[must_use]
pub fn net_greeks(kind: StrategyKind, sold: &QuoteGreeks, bought: &QuoteGreeks) -> NetGreeks {
    match kind.nature() {
        SpreadNature::Credit => NetGreeks::difference(sold, bought),
        SpreadNature::Debit => NetGreeks::difference(bought, sold),
    }
}
