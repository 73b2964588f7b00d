//! Core data model: quotes, strategies, candidates, sensitivities.

mod candidate;
mod greeks;
mod quote;
mod strategy;

pub use candidate::{LegDirection, SpreadCandidate, SpreadLeg, SpreadMetrics};
pub use greeks::{NetGreeks, QuoteGreeks};
pub use quote::{OptionQuote, OptionType, QuoteTable};
pub use strategy::{ALL_STRATEGIES, SpreadNature, StrategyFilter, StrategyKind};
