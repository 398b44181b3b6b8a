//! Two-panel tick chart rendered with `plotters`.
//!
//! The upper panel draws price as a line, the lower panel draws the volume
//! bars prepared by `VolumeSeries`. Both panels share the same time range. The
//! figure is written as SVG.

use crate::model::volume_bins::VolumeSeries;
use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tick_common::{Tick, TickError};

/// Output size in pixels (width, height).
pub const FIGURE_SIZE: (u32, u32) = (1400, 1000);

const PRICE_COLOR: RGBColor = BLUE;
const VOLUME_COLOR: RGBColor = RED;

/// Render `ticks` and `volume` into an SVG file at `path`.
///
/// `ticks` must be sorted by timestamp and non-empty.
pub fn render_chart(ticks: &[Tick], volume: &VolumeSeries, path: &Path) -> Result<(), TickError> {
    let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
    draw_figure(&root, ticks, volume)?;
    root.present().map_err(plot_error)?;
    Ok(())
}

fn draw_figure<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    ticks: &[Tick],
    volume: &VolumeSeries,
) -> Result<(), TickError> {
    let (Some(first), Some(last)) = (ticks.first(), ticks.last()) else {
        return Err(TickError::Plot("no ticks to draw".to_string()));
    };
    let time_range = time_range(first.timestamp, last.timestamp, volume.bar_width);

    root.fill(&WHITE).map_err(plot_error)?;
    let title = format!(
        "Tick Data Analysis: Price and Volume Over Time ({} Ticks)",
        ticks.len()
    );
    let body = root
        .titled(&title, ("sans-serif", 24))
        .map_err(plot_error)?;
    let panels = body.split_evenly((2, 1));

    let (min_price, max_price) = ticks
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
            (lo.min(t.price), hi.max(t.price))
        });
    let pad = ((max_price - min_price) * 0.05).max(0.01);

    let mut price_chart = ChartBuilder::on(&panels[0])
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(70)
        .build_cartesian_2d(time_range.clone(), (min_price - pad)..(max_price + pad))
        .map_err(plot_error)?;
    price_chart
        .configure_mesh()
        .y_desc("Price ($)")
        .x_labels(8)
        .x_label_formatter(&|t: &DateTime<Utc>| t.format("%H:%M:%S").to_string())
        .draw()
        .map_err(plot_error)?;
    price_chart
        .draw_series(LineSeries::new(
            ticks.iter().map(|t| (t.timestamp.and_utc(), t.price)),
            PRICE_COLOR.stroke_width(1),
        ))
        .map_err(plot_error)?
        .label("Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], PRICE_COLOR));
    price_chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    let volume_top = volume.max_volume() + volume.max_volume() / 10 + 1;
    let mut volume_chart = ChartBuilder::on(&panels[1])
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(70)
        .build_cartesian_2d(time_range, 0u64..volume_top)
        .map_err(plot_error)?;
    volume_chart
        .configure_mesh()
        .x_desc("Timestamp")
        .y_desc("Volume")
        .x_labels(8)
        .disable_x_mesh()
        .x_label_formatter(&|t: &DateTime<Utc>| t.format("%H:%M:%S").to_string())
        .draw()
        .map_err(plot_error)?;
    volume_chart
        .draw_series(volume.bars.iter().map(|bar| {
            let (left, right) = bar_span(bar.timestamp, volume.bar_width);
            Rectangle::new([(left, 0), (right, bar.volume)], VOLUME_COLOR.mix(0.7).filled())
        }))
        .map_err(plot_error)?
        .label(volume.label())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], VOLUME_COLOR.filled()));
    volume_chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(plot_error)?;

    Ok(())
}

/// Horizontal extent of a bar centered on `timestamp`.
fn bar_span(timestamp: NaiveDateTime, bar_width: TimeDelta) -> (DateTime<Utc>, DateTime<Utc>) {
    let left = timestamp - bar_width / 2;
    (left.and_utc(), (left + bar_width).and_utc())
}

/// Shared x range, widened so the first and last bars are fully visible.
fn time_range(
    first: NaiveDateTime,
    last: NaiveDateTime,
    bar_width: TimeDelta,
) -> Range<DateTime<Utc>> {
    let (start, _) = bar_span(first, bar_width);
    let (_, end) = bar_span(last.max(first + TimeDelta::milliseconds(1)), bar_width);
    start..end
}

fn plot_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> TickError {
    TickError::Plot(err.to_string())
}
