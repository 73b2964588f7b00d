//! Ingestion error types.

use thiserror::Error;

/// Errors from loading a quote-table CSV.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be read or parsed as CSV.
    #[error("Failed to read quote CSV '{path}': {source}")]
    Read {
        /// Path of the file.
        path: String,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("Quote CSV is missing required column '{column}'")]
    MissingColumn {
        /// Name of the missing column.
        column: String,
    },
}
