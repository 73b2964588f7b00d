//! Quote-table ingestion.
//!
//! External collaborator to the engine: turns a cleaned option-chain CSV
//! into a normalized [`crate::domain::QuoteTable`]. All unit, locale, and
//! column handling lives here; the engine assumes consistent monetary
//! values.

mod error;
mod loader;

pub use error::IngestError;
pub use loader::{load_quotes, parse_decimal};
