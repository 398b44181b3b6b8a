//! Presentation models for the plotter.
//!
//! - `volume_mode` — CLI choice between automatic, raw and binned volume bars.
//! - `volume_bins` — turns a tick table into the bars of the volume panel.
pub mod volume_bins;
pub mod volume_mode;
