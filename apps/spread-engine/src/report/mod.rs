//! Human-readable optimization reports.
//!
//! Renders a detailed text report for a chosen spread. The engine itself
//! never prints; callers decide whether the rendered string goes to a log,
//! a terminal, or an API response.

mod currency;

pub use currency::{fixed2, format_brl, format_brl_opt};

use std::fmt::Write as _;

use crate::domain::{SpreadCandidate, SpreadNature};
use crate::engine::{ManualSpreadInput, ManualSpreadResult, OptimizationRequest};

const RULE: &str = "===========================================================================";
const THIN_RULE: &str =
    "---------------------------------------------------------------------------";

/// Render the detailed report for an optimization winner.
#[must_use]
pub fn render_optimization(candidate: &SpreadCandidate<'_>, request: &OptimizationRequest) -> String {
    let mut out = String::new();
    let metrics = &candidate.metrics;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "OPTIMIZATION REPORT: {}",
        candidate.strategy.to_string().to_uppercase()
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Underlying: {} | Spot: {}",
        candidate.sold.quote.underlying,
        format_brl(request.spot_price)
    );
    if let Some(expiry) = candidate.sold.quote.expiry {
        match candidate.sold.quote.days_to_expiry {
            Some(days) => {
                let _ = writeln!(out, "Expiry: {expiry} ({days} business days)");
            }
            None => {
                let _ = writeln!(out, "Expiry: {expiry}");
            }
        }
    }
    let _ = writeln!(
        out,
        "Lots of {} contracts | Total fees: {}",
        request.quantity,
        format_brl(request.fees_total)
    );
    let nature = match candidate.strategy.nature() {
        SpreadNature::Credit => "CREDIT (premium received)",
        SpreadNature::Debit => "DEBIT (premium paid)",
    };
    let _ = writeln!(out, "Nature: {nature}");
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "SELL: {} (Strike: {} | Premium: {})",
        candidate.sold.quote.ticker,
        format_brl(candidate.sold.strike()),
        format_brl(candidate.sold.premium())
    );
    let _ = writeln!(
        out,
        "BUY:  {} (Strike: {} | Premium: {})",
        candidate.bought.quote.ticker,
        format_brl(candidate.bought.strike()),
        format_brl(candidate.bought.premium())
    );
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "NET PREMIUM per unit: {}",
        format_brl(metrics.net_premium_per_unit)
    );
    let _ = writeln!(out, "BREAKEVEN: {} (per unit)", format_brl(metrics.breakeven));
    let _ = writeln!(
        out,
        "NOTIONAL EXPOSURE TOTAL: {}",
        format_brl(metrics.notional_total)
    );
    let _ = writeln!(
        out,
        "MAX PROFIT TOTAL (net of fees): {}",
        format_brl(metrics.max_profit_total)
    );
    let _ = writeln!(
        out,
        "MAX LOSS TOTAL (fees included): {}",
        format_brl(metrics.max_loss_total)
    );
    match metrics.risk_reward {
        Some(ratio) => {
            let _ = writeln!(out, "NET RISK/REWARD RATIO: {}", fixed2(ratio));
        }
        None => {
            let _ = writeln!(out, "NET RISK/REWARD RATIO: N/A");
        }
    }

    let greeks = &candidate.net_greeks;
    if greeks.delta.is_some()
        || greeks.gamma.is_some()
        || greeks.theta.is_some()
        || greeks.vega.is_some()
    {
        let _ = writeln!(out, "{THIN_RULE}");
        let _ = writeln!(out, "NET POSITION GREEKS (per unit)");
        let fmt = |value: Option<rust_decimal::Decimal>| {
            value.map_or_else(|| "N/A".to_string(), fixed2)
        };
        let _ = writeln!(out, "NET DELTA: {}", fmt(greeks.delta));
        let _ = writeln!(out, "NET GAMMA: {}", fmt(greeks.gamma));
        let _ = writeln!(out, "NET THETA: {}", fmt(greeks.theta));
        let _ = writeln!(out, "NET VEGA:  {}", fmt(greeks.vega));
    }
    let _ = writeln!(out, "{RULE}");

    out
}

/// Render the report for a manual bear call credit calculation.
#[must_use]
pub fn render_manual(result: &ManualSpreadResult, input: &ManualSpreadInput) -> String {
    let mut out = String::new();
    let metrics = &result.metrics;

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "MANUAL SPREAD REPORT: {}",
        result.strategy.to_string().to_uppercase()
    );
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(
        out,
        "Underlying: {} | Spot: {}",
        input.underlying,
        format_brl(input.spot_price)
    );
    let _ = writeln!(
        out,
        "SELL: Strike {} | Premium {}",
        format_brl(input.sold_strike),
        format_brl(input.sold_premium)
    );
    let _ = writeln!(
        out,
        "BUY:  Strike {} | Premium {}",
        format_brl(input.bought_strike),
        format_brl(input.bought_premium)
    );
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "NET CREDIT per unit (after per-leg fees): {}",
        format_brl(metrics.net_premium_per_unit)
    );
    let _ = writeln!(out, "BREAKEVEN: {}", format_brl(metrics.breakeven));
    let _ = writeln!(
        out,
        "MAX PROFIT TOTAL ({} units): {}",
        input.quantity,
        format_brl(metrics.max_profit_total)
    );
    let _ = writeln!(
        out,
        "MAX LOSS TOTAL ({} units): {}",
        input.quantity,
        format_brl(metrics.max_loss_total)
    );
    let _ = writeln!(
        out,
        "IV SOLD: {} | IV BOUGHT: {}",
        result
            .sold_implied_vol
            .map_or_else(|| "N/A".to_string(), |iv| fixed2(iv * rust_decimal::Decimal::ONE_HUNDRED) + "%"),
        result
            .bought_implied_vol
            .map_or_else(|| "N/A".to_string(), |iv| fixed2(iv * rust_decimal::Decimal::ONE_HUNDRED) + "%"),
    );
    let _ = writeln!(out, "{RULE}");

    out
}
