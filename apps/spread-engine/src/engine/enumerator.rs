//! Strike-pair enumeration.
//!
//! Quotes are bucketed by (underlying, expiry, option type); a vertical
//! spread only ever combines quotes from one bucket. Within a bucket the
//! quotes are sorted by strike and every unordered pair with distinct
//! strikes is yielded exactly once: C(n,2) pairs for n quotes. Chains are
//! small (tens of strikes per expiry), so the quadratic pairing is not a
//! scaling concern.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{OptionQuote, OptionType};

/// One (underlying, expiry, option type) bucket, sorted by strike.
#[derive(Debug, Clone)]
pub struct QuoteGroup<'a> {
    /// Normalized underlying identifier.
    pub underlying: String,
    /// Shared expiry of the bucket; `None` groups quotes with unknown expiry.
    pub expiry: Option<NaiveDate>,
    /// Option type of every quote in the bucket.
    pub option_type: OptionType,
    /// Member quotes, ascending by strike.
    pub quotes: Vec<&'a OptionQuote>,
}

impl<'a> QuoteGroup<'a> {
    /// Every unordered strike pair `(low, high)` with `low.strike < high.strike`.
    ///
    /// Duplicate-strike rows never pair with each other.
    #[must_use]
    pub fn strike_pairs(&self) -> Vec<(&'a OptionQuote, &'a OptionQuote)> {
        let mut pairs = Vec::new();
        for i in 0..self.quotes.len() {
            for j in (i + 1)..self.quotes.len() {
                let low = self.quotes[i];
                let high = self.quotes[j];
                if low.strike == high.strike {
                    continue;
                }
                pairs.push((low, high));
            }
        }
        pairs
    }
}

/// Bucket quotes by (underlying, expiry, option type).
///
/// Buckets with fewer than two quotes cannot form a pair and are skipped.
/// The `BTreeMap` keying keeps group order deterministic regardless of
/// input order.
#[must_use]
pub fn group_quotes<'a>(quotes: &[&'a OptionQuote]) -> Vec<QuoteGroup<'a>> {
    let mut buckets: BTreeMap<(String, Option<NaiveDate>, OptionType), Vec<&'a OptionQuote>> =
        BTreeMap::new();

    for quote in quotes {
        let key = (
            quote.underlying.to_ascii_uppercase(),
            quote.expiry,
            quote.option_type,
        );
        buckets.entry(key).or_default().push(quote);
    }

    buckets
        .into_iter()
        .filter(|(_, members)| members.len() >= 2)
        .map(|((underlying, expiry, option_type), mut members)| {
            members.sort_by(|a, b| a.strike.cmp(&b.strike));
            QuoteGroup {
                underlying,
                expiry,
                option_type,
                quotes: members,
            }
        })
        .collect()
}
