//! Delimited-text export and import of tick tables.
//!
//! The file layout is a `timestamp,price,volume` header followed by one row per
//! tick. Timestamps use [`TIMESTAMP_FORMAT`](crate::csv_format::TIMESTAMP_FORMAT),
//! prices are written with their shortest round-trip representation so that an
//! export followed by an import reproduces the same values.
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Deserialize;

use crate::csv_format::{CSV_HEADER, format_timestamp, parse_timestamp};
use crate::error::TickError;
use crate::tick::Tick;

/// Raw row as it appears in the file, before timestamp parsing.
#[derive(Debug, Deserialize)]
struct TickRecord {
    timestamp: String,
    price: f64,
    volume: u32,
}

/// Trait providing delimited-text encoding for tick tables.
pub trait TickCsv: Sized {
    /// Writes the header and one row per value into `writer`.
    fn write_csv<W: Write>(values: &[Self], writer: W) -> Result<(), TickError>;

    /// Reads every data row from `reader`, in file order.
    ///
    /// Returns an error if any row cannot be decoded.
    fn read_csv<R: Read>(reader: R) -> Result<Vec<Self>, TickError>;
}

impl TickCsv for Tick {
    fn write_csv<W: Write>(values: &[Self], writer: W) -> Result<(), TickError> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(CSV_HEADER)?;

        for tick in values {
            wtr.write_record([
                format_timestamp(&tick.timestamp),
                tick.price.to_string(),
                tick.volume.to_string(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn read_csv<R: Read>(reader: R) -> Result<Vec<Self>, TickError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut ticks = Vec::new();

        for result in rdr.deserialize::<TickRecord>() {
            let record = result?;
            ticks.push(Tick {
                timestamp: parse_timestamp(&record.timestamp)?,
                price: record.price,
                volume: record.volume,
            });
        }
        Ok(ticks)
    }
}

/// Create (or truncate) `path` and write the tick table into it.
pub fn export_to_path(path: &Path, ticks: &[Tick]) -> Result<(), TickError> {
    let file = File::create(path)?;
    Tick::write_csv(ticks, BufWriter::new(file))
}

/// Open `path` and read the tick table stored in it.
pub fn import_from_path(path: &Path) -> Result<Vec<Tick>, TickError> {
    let file = File::open(path)?;
    Tick::read_csv(BufReader::new(file))
}
