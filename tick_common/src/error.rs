//! Error types shared between the generator and the plotter.
//!
//! The `TickError` enum unifies the failure cases of tick generation, CSV
//! export/import, configuration loading, and chart rendering, allowing every
//! crate in the workspace to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the generator and the plotter.
#[derive(Error, Debug)]
pub enum TickError {
    /// A generation parameter is out of its valid domain (count, bound, deviation).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The assembler was given columns of different lengths.
    #[error(
        "Length mismatch: {timestamps} timestamps, {prices} prices, {volumes} volumes"
    )]
    LengthMismatch {
        /// Number of timestamps supplied.
        timestamps: usize,
        /// Number of prices supplied.
        prices: usize,
        /// Number of volumes supplied.
        volumes: usize,
    },

    /// I/O error originating from the standard library (file create/open/write).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure while reading or writing delimited text via the `csv` crate.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Failure while encoding/decoding JSON configuration via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A timestamp cell could not be parsed into a date-time.
    #[error("Timestamp parse error: {0}")]
    TimestampParse(String),

    /// The chart backend failed while drawing or saving the image.
    #[error("Plot error: {0}")]
    Plot(String),
}

impl TickError {
    /// Returns `true` when the error is an I/O "file not found" condition.
    ///
    /// The `csv` crate wraps I/O failures in its own error type, so both
    /// layers are inspected.
    pub fn is_not_found(&self) -> bool {
        match self {
            TickError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            TickError::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(io_err) => io_err.kind() == io::ErrorKind::NotFound,
                _ => false,
            },
            _ => false,
        }
    }

    /// `true` for any I/O failure, raised directly or while the csv reader was
    /// pulling bytes.
    pub fn is_io(&self) -> bool {
        match self {
            TickError::Io(_) => true,
            TickError::Csv(e) => matches!(e.kind(), csv::ErrorKind::Io(_)),
            _ => false,
        }
    }
}
