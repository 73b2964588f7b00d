//! Feasibility filtering and deterministic ranking.
//!
//! A pure function over the full candidate set. Candidates with undefined
//! risk (loss total ≤ 0) or with fees eating the whole gain are dropped;
//! the survivors split into those meeting the quality gate and those that
//! are merely profitable. The best of the gated tier wins; when the gate
//! empties the field, the best merely-profitable candidate is surfaced
//! explicitly instead of a bare "nothing found".

use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::domain::SpreadCandidate;

/// Outcome of ranking one request's candidate set.
#[derive(Debug, Clone, Copy)]
pub enum RankedOutcome<'a> {
    /// A candidate cleared the quality gate.
    Qualified(SpreadCandidate<'a>),
    /// No candidate cleared the gate, but at least one was profitable.
    BestUnqualified(SpreadCandidate<'a>),
    /// Nothing was profitable at all.
    NoneViable,
}

/// Total order over rankable candidates.
///
/// Higher ratio wins; ties go to the larger profit total, then to the
/// lower sold strike. Total ordering keeps parallel merges deterministic.
fn compare(a: &(Decimal, SpreadCandidate<'_>), b: &(Decimal, SpreadCandidate<'_>)) -> Ordering {
    a.0.cmp(&b.0)
        .then_with(|| {
            a.1.metrics
                .max_profit_total
                .cmp(&b.1.metrics.max_profit_total)
        })
        .then_with(|| b.1.sold_strike().cmp(&a.1.sold_strike()))
}

/// Keep the better of two rankable candidates.
fn prefer<'a>(
    current: Option<(Decimal, SpreadCandidate<'a>)>,
    challenger: (Decimal, SpreadCandidate<'a>),
) -> Option<(Decimal, SpreadCandidate<'a>)> {
    match current {
        Some(best) if compare(&best, &challenger) != Ordering::Less => Some(best),
        _ => Some(challenger),
    }
}

/// Rank a candidate set under the request's quality gate.
#[must_use]
pub fn rank<'a>(
    candidates: &[SpreadCandidate<'a>],
    min_risk_reward: Decimal,
) -> RankedOutcome<'a> {
    let mut best_qualified: Option<(Decimal, SpreadCandidate<'a>)> = None;
    let mut best_unqualified: Option<(Decimal, SpreadCandidate<'a>)> = None;

    for candidate in candidates {
        // Undefined ratio means non-positive risk: structurally excluded,
        // never clamped to a floor value.
        let Some(ratio) = candidate.metrics.risk_reward else {
            continue;
        };
        if candidate.metrics.max_profit_total <= Decimal::ZERO {
            continue;
        }

        let entry = (ratio, *candidate);
        if ratio >= min_risk_reward {
            best_qualified = prefer(best_qualified, entry);
        } else {
            best_unqualified = prefer(best_unqualified, entry);
        }
    }

    match (best_qualified, best_unqualified) {
        (Some((_, best)), _) => RankedOutcome::Qualified(best),
        (None, Some((_, best))) => RankedOutcome::BestUnqualified(best),
        (None, None) => RankedOutcome::NoneViable,
    }
}
