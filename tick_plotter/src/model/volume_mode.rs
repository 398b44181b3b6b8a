//! How the volume panel groups ticks into bars.

use clap::ValueEnum;
use strum_macros::{Display, EnumString};

/// Volume bar strategy selected on the command line.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Display, EnumString, Eq, PartialEq)]
#[clap(rename_all = "lower")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum VolumeMode {
    /// Bin only when the table is larger than the binning threshold.
    #[default]
    Auto,
    /// Always draw one bar per tick.
    Raw,
    /// Always sum fixed-size groups of ticks into one bar.
    Binned,
}
