// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::too_many_lines,
        clippy::items_after_statements
    )
)]

//! Spread Engine - Core Library
//!
//! Evaluates exchange-traded option quotes and constructs two-leg vertical
//! spreads (bull/bear, call/put, credit/debit), computing each candidate's
//! risk, reward, breakeven, and net sensitivities, then selects the best
//! risk-adjusted candidate under a quality gate.
//!
//! # Layout
//!
//! - [`domain`]: quotes, strategies, candidates, sensitivities
//! - [`engine`]: enumeration, metrics, netting, ranking, the `optimize`
//!   façade, and the manual single-spread entry point
//! - [`ingest`]: CSV quote-table loading and normalization
//! - [`report`]: currency formatting and text report rendering
//! - [`server`]: axum HTTP adapter
//! - [`config`]: environment-driven settings
//!
//! The engine itself is synchronous, pure, and free of I/O; ingestion,
//! reporting, and the HTTP surface are collaborators around it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Core data model.
pub mod domain;

/// Spread construction and optimization.
pub mod engine;

/// Quote-table ingestion.
pub mod ingest;

/// Report rendering.
pub mod report;

/// HTTP adapter.
pub mod server;

/// Runtime settings.
pub mod config;

pub use config::{ConfigError, EngineDefaults, Settings};
pub use domain::{
    NetGreeks, OptionQuote, OptionType, QuoteGreeks, QuoteTable, SpreadCandidate, SpreadLeg,
    SpreadMetrics, SpreadNature, StrategyFilter, StrategyKind,
};
pub use engine::{
    EngineError, ManualSpreadInput, ManualSpreadResult, OptimizationRequest, OptimizationResult,
    bear_call_credit, optimize,
};
pub use ingest::{IngestError, load_quotes};
pub use server::{AppState, create_router};
