//! Per-candidate financial metrics.
//!
//! One resolver covers all four strategy kinds. Sign conventions:
//! `net_premium_per_unit = sold premium − bought premium`, which comes out
//! positive for credit kinds and negative for debit kinds; the debit amount
//! is its absolute value. Fees are a flat total per spread and always work
//! against the position: subtracted from the profit total, added to the
//! loss total.

use rust_decimal::Decimal;

use crate::domain::{
    OptionQuote, SpreadCandidate, SpreadLeg, SpreadMetrics, SpreadNature, StrategyKind,
};

use super::netting::net_greeks;

/// Build the candidate for one strike pair under one strategy kind.
///
/// `low` and `high` must come from the same (underlying, expiry, type)
/// group with `low.strike < high.strike`; a non-positive width is rejected
/// here even though the enumerator cannot produce one.
#[must_use]
pub fn build_candidate<'a>(
    kind: StrategyKind,
    low: &'a OptionQuote,
    high: &'a OptionQuote,
    quantity: u32,
    fees_total: Decimal,
) -> Option<SpreadCandidate<'a>> {
    let width = high.strike - low.strike;
    if width <= Decimal::ZERO {
        return None;
    }

    let (sold, bought) = if kind.sells_low_strike() {
        (SpreadLeg::sold(low), SpreadLeg::bought(high))
    } else {
        (SpreadLeg::sold(high), SpreadLeg::bought(low))
    };

    let net_premium = sold.premium() - bought.premium();

    // Credit keeps the premium and risks the rest of the width; debit pays
    // the premium up front and the width is what it can earn back.
    let (profit_unit, loss_unit) = match kind.nature() {
        SpreadNature::Credit => (net_premium, width - net_premium),
        SpreadNature::Debit => {
            let debit = net_premium.abs();
            (width - debit, debit)
        }
    };

    let breakeven = breakeven_for(kind, sold, bought, net_premium);

    let qty = Decimal::from(quantity);
    let max_profit_total = profit_unit * qty - fees_total;
    let max_loss_total = loss_unit * qty + fees_total;
    let risk_reward = if max_loss_total > Decimal::ZERO {
        Some(max_profit_total / max_loss_total)
    } else {
        None
    };

    let metrics = SpreadMetrics {
        net_premium_per_unit: net_premium,
        max_profit_per_unit: profit_unit,
        max_loss_per_unit: loss_unit,
        max_profit_total,
        max_loss_total,
        breakeven,
        notional_total: width * qty,
        risk_reward,
    };

    Some(SpreadCandidate {
        strategy: kind,
        sold,
        bought,
        metrics,
        net_greeks: net_greeks(kind, &sold.quote.greeks, &bought.quote.greeks),
    })
}

/// Expiry price where the position's payoff is exactly zero.
///
/// The anchor is the inner leg (sold for credit, bought for debit) and the
/// premium is carried away from it: upward for calls, downward for puts.
fn breakeven_for(
    kind: StrategyKind,
    sold: SpreadLeg<'_>,
    bought: SpreadLeg<'_>,
    net_premium: Decimal,
) -> Decimal {
    let (anchor, offset) = match kind.nature() {
        SpreadNature::Credit => (sold.strike(), net_premium),
        SpreadNature::Debit => (bought.strike(), net_premium.abs()),
    };
    match kind {
        StrategyKind::BullCallDebit | StrategyKind::BearCallCredit => anchor + offset,
        StrategyKind::BullPutCredit | StrategyKind::BearPutDebit => anchor - offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OptionType, QuoteGreeks};
    use rust_decimal_macros::dec;
    use test_case::test_case;

    fn quote(option_type: OptionType, strike: Decimal, premium: Decimal) -> OptionQuote {
        OptionQuote {
            underlying: "BOVA11".to_string(),
            ticker: format!("BOVA-{option_type}-{strike}"),
            option_type,
            strike,
            premium,
            implied_vol: None,
            greeks: QuoteGreeks::default(),
            expiry: None,
            days_to_expiry: None,
        }
    }

    #[test]
    fn bear_call_credit_metrics() {
        // Sell the 118 call at 3.50, buy the 123 call at 1.00.
        let low = quote(OptionType::Call, dec!(118.00), dec!(3.50));
        let high = quote(OptionType::Call, dec!(123.00), dec!(1.00));

        let candidate =
            build_candidate(StrategyKind::BearCallCredit, &low, &high, 1000, dec!(0)).unwrap();

        assert_eq!(candidate.sold.strike(), dec!(118.00));
        assert_eq!(candidate.bought.strike(), dec!(123.00));
        assert_eq!(candidate.metrics.net_premium_per_unit, dec!(2.50));
        assert_eq!(candidate.metrics.max_profit_per_unit, dec!(2.50));
        assert_eq!(candidate.metrics.max_loss_per_unit, dec!(2.50));
        assert_eq!(candidate.metrics.breakeven, dec!(120.50));
        assert_eq!(candidate.metrics.notional_total, dec!(5000.00));
    }

    #[test]
    fn bull_call_debit_metrics() {
        // Buy the 100 call at 8, sell the 110 call at 3: a 5.00 debit.
        let low = quote(OptionType::Call, dec!(100), dec!(8));
        let high = quote(OptionType::Call, dec!(110), dec!(3));

        let candidate =
            build_candidate(StrategyKind::BullCallDebit, &low, &high, 1, dec!(0)).unwrap();

        assert_eq!(candidate.sold.strike(), dec!(110));
        assert_eq!(candidate.bought.strike(), dec!(100));
        assert_eq!(candidate.metrics.net_premium_per_unit, dec!(-5));
        assert_eq!(candidate.metrics.max_profit_per_unit, dec!(5));
        assert_eq!(candidate.metrics.max_loss_per_unit, dec!(5));
        assert_eq!(candidate.metrics.breakeven, dec!(105));
        assert_eq!(candidate.metrics.risk_reward, Some(dec!(1)));
    }

    #[test]
    fn bull_put_credit_metrics() {
        // Sell the 60 put at 2.80, buy the 55 put at 1.10.
        let low = quote(OptionType::Put, dec!(55), dec!(1.10));
        let high = quote(OptionType::Put, dec!(60), dec!(2.80));

        let candidate =
            build_candidate(StrategyKind::BullPutCredit, &low, &high, 100, dec!(0)).unwrap();

        assert_eq!(candidate.sold.strike(), dec!(60));
        assert_eq!(candidate.bought.strike(), dec!(55));
        assert_eq!(candidate.metrics.net_premium_per_unit, dec!(1.70));
        assert_eq!(candidate.metrics.max_loss_per_unit, dec!(3.30));
        // Credit put breakeven sits below the sold strike.
        assert_eq!(candidate.metrics.breakeven, dec!(58.30));
    }

    #[test]
    fn bear_put_debit_metrics() {
        // Buy the 60 put at 2.80, sell the 55 put at 1.10: a 1.70 debit.
        let low = quote(OptionType::Put, dec!(55), dec!(1.10));
        let high = quote(OptionType::Put, dec!(60), dec!(2.80));

        let candidate =
            build_candidate(StrategyKind::BearPutDebit, &low, &high, 100, dec!(0)).unwrap();

        assert_eq!(candidate.sold.strike(), dec!(55));
        assert_eq!(candidate.bought.strike(), dec!(60));
        assert_eq!(candidate.metrics.net_premium_per_unit, dec!(-1.70));
        assert_eq!(candidate.metrics.max_profit_per_unit, dec!(3.30));
        assert_eq!(candidate.metrics.max_loss_per_unit, dec!(1.70));
        assert_eq!(candidate.metrics.breakeven, dec!(58.30));
    }

    #[test_case(StrategyKind::BearCallCredit)]
    #[test_case(StrategyKind::BullCallDebit)]
    fn call_profit_and_loss_sum_to_width(kind: StrategyKind) {
        let low = quote(OptionType::Call, dec!(118.00), dec!(3.50));
        let high = quote(OptionType::Call, dec!(123.00), dec!(1.00));

        let candidate = build_candidate(kind, &low, &high, 1, dec!(0)).unwrap();
        assert_eq!(
            candidate.metrics.max_profit_per_unit + candidate.metrics.max_loss_per_unit,
            dec!(5.00)
        );
    }

    #[test_case(StrategyKind::BullPutCredit)]
    #[test_case(StrategyKind::BearPutDebit)]
    fn put_profit_and_loss_sum_to_width(kind: StrategyKind) {
        let low = quote(OptionType::Put, dec!(55), dec!(1.10));
        let high = quote(OptionType::Put, dec!(60), dec!(2.80));

        let candidate = build_candidate(kind, &low, &high, 1, dec!(0)).unwrap();
        assert_eq!(
            candidate.metrics.max_profit_per_unit + candidate.metrics.max_loss_per_unit,
            dec!(5)
        );
    }

    #[test]
    fn fees_reduce_profit_and_increase_loss() {
        let low = quote(OptionType::Call, dec!(118.00), dec!(3.50));
        let high = quote(OptionType::Call, dec!(123.00), dec!(1.00));

        let candidate =
            build_candidate(StrategyKind::BearCallCredit, &low, &high, 100, dec!(44.00)).unwrap();

        // 2.50 x 100 - 44.00
        assert_eq!(candidate.metrics.max_profit_total, dec!(206.00));
        // 2.50 x 100 + 44.00
        assert_eq!(candidate.metrics.max_loss_total, dec!(294.00));
    }

    #[test]
    fn zero_or_negative_risk_leaves_ratio_undefined() {
        // Premiums wider than the strikes: credit exceeds the width, so the
        // theoretical loss is negative. The ratio must stay undefined rather
        // than be clamped.
        let low = quote(OptionType::Call, dec!(100), dec!(7));
        let high = quote(OptionType::Call, dec!(102), dec!(1));

        let candidate =
            build_candidate(StrategyKind::BearCallCredit, &low, &high, 1, dec!(0)).unwrap();

        assert_eq!(candidate.metrics.max_loss_per_unit, dec!(-4));
        assert_eq!(candidate.metrics.risk_reward, None);
    }

    #[test]
    fn inverted_pair_is_rejected() {
        let low = quote(OptionType::Call, dec!(118.00), dec!(3.50));
        let high = quote(OptionType::Call, dec!(123.00), dec!(1.00));

        assert!(build_candidate(StrategyKind::BearCallCredit, &high, &low, 1, dec!(0)).is_none());
    }
}
