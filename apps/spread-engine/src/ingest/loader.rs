//! CSV quote-table loader.
//!
//! Reads the cleaned option-chain export (one row per option quote) into a
//! [`QuoteTable`]. Columns are matched by header name, case-insensitively,
//! so column order does not matter. Numbers are accepted in both plain
//! (`1234.56`) and pt-BR (`1.234,56`) notation. The premium is normalized
//! to a single monetary field here: a direct `premio` column wins; a
//! `premiopct` column is converted as `strike × pct / 100`. The engine
//! never sees which convention the file used.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;
use rust_decimal::Decimal;

use crate::domain::{OptionQuote, OptionType, QuoteGreeks, QuoteTable};

use super::error::IngestError;

const REQUIRED_COLUMNS: [&str; 4] = ["idacao", "ticker", "tipo", "strike"];

/// Column indices resolved from the header row.
struct ColumnMap {
    by_name: HashMap<String, usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Result<Self, IngestError> {
        let by_name: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(index, name)| (name.trim().to_ascii_lowercase(), index))
            .collect();

        for column in REQUIRED_COLUMNS {
            if !by_name.contains_key(column) {
                return Err(IngestError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        if !by_name.contains_key("premio") && !by_name.contains_key("premiopct") {
            return Err(IngestError::MissingColumn {
                column: "premio (or premiopct)".to_string(),
            });
        }

        Ok(Self { by_name })
    }

    fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.by_name
            .get(column)
            .and_then(|&index| record.get(index))
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Parse a decimal in plain or pt-BR notation.
///
/// `1.234,56` drops the thousands dots and swaps the comma; `1234.56`
/// passes through untouched.
#[must_use]
pub fn parse_decimal(value: &str) -> Option<Decimal> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };
    normalized.parse().ok()
}

/// Parse an expiry date, ISO (`2026-01-16`) or pt-BR (`16/01/2026`).
fn parse_expiry(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%d/%m/%Y"))
        .ok()
}

/// Load a quote table from a CSV file.
///
/// Rows failing the quality gate (unrecognized type, non-positive strike,
/// missing or negative premium) are skipped with a warning; a malformed
/// file or a missing required column is an error.
pub fn load_quotes(path: impl AsRef<Path>) -> Result<QuoteTable, IngestError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path).map_err(|source| IngestError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let columns = ColumnMap::from_headers(reader.headers().map_err(|source| IngestError::Read {
        path: path.display().to_string(),
        source,
    })?)?;

    let mut quotes = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|source| IngestError::Read {
            path: path.display().to_string(),
            source,
        })?;

        match parse_record(&columns, &record) {
            Some(quote) => quotes.push(quote),
            None => {
                skipped += 1;
                tracing::warn!(row = row + 2, "skipping quote row that failed the quality gate");
            }
        }
    }

    tracing::info!(
        path = %path.display(),
        loaded = quotes.len(),
        skipped,
        "loaded quote table"
    );

    Ok(QuoteTable::new(quotes))
}

fn parse_record(columns: &ColumnMap, record: &StringRecord) -> Option<OptionQuote> {
    let underlying = columns.get(record, "idacao")?.to_string();
    let ticker = columns.get(record, "ticker")?.to_string();
    let option_type = OptionType::parse(columns.get(record, "tipo")?)?;

    let strike = parse_decimal(columns.get(record, "strike")?)?;
    if strike <= Decimal::ZERO {
        return None;
    }

    // Premium normalization: a monetary column wins over the percentage one.
    let premium = match columns.get(record, "premio").and_then(parse_decimal) {
        Some(direct) => direct,
        None => {
            let pct = columns.get(record, "premiopct").and_then(parse_decimal)?;
            strike * pct / Decimal::ONE_HUNDRED
        }
    };
    if premium < Decimal::ZERO {
        return None;
    }

    let optional = |column: &str| columns.get(record, column).and_then(parse_decimal);

    Some(OptionQuote {
        underlying,
        ticker,
        option_type,
        strike,
        premium,
        implied_vol: optional("volimplicita"),
        greeks: QuoteGreeks {
            delta: optional("delta"),
            gamma: optional("gamma"),
            theta: optional("theta"),
            vega: optional("vega"),
        },
        expiry: columns.get(record, "vencimento").and_then(parse_expiry),
        days_to_expiry: columns
            .get(record, "diasuteis")
            .and_then(|value| value.parse().ok()),
    })
}
