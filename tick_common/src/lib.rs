//!
//! Common types and utilities shared by the tick generator and the tick plotter.
//!
//! This crate aggregates:
//! - `error` — unified error type `TickError` used across the workspace.
//! - `result` — handy `Result<T, TickError>` alias.
//! - `tick` — the `Tick` record and table ordering helpers.
//! - `csv_format` — file-format constants and timestamp formatting/parsing.
//! - `tick_csv` — delimited-text export and import of tick tables.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod tick;
pub mod csv_format;
pub mod tick_csv;

pub use error::TickError;
pub use result::Result;
pub use tick::Tick;
