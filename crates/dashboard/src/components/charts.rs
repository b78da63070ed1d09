//! Server-rendered SVG charts for the dashboard.
//!
//! Each chart is a view model with coordinates already computed in a fixed
//! viewport, so templates only emit `<rect>`, `<polygon>` and `<polyline>`
//! elements. Values are scaled against the largest value in the series; a
//! series whose largest value is not positive is drawn flat on the baseline.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use shoe_inventory_core::ShoeRecord;
use shoe_inventory_core::stats::{self, Bucket};

use crate::filters::format_idr;

/// Viewport width.
pub const WIDTH: f64 = 640.0;
/// Viewport height.
pub const HEIGHT: f64 = 260.0;

const MARGIN_X: f64 = 24.0;
const MARGIN_TOP: f64 = 24.0;
/// Y coordinate of the x axis.
pub const BASELINE: f64 = 216.0;
const PLOT_HEIGHT: f64 = BASELINE - MARGIN_TOP;
const PLOT_WIDTH: f64 = WIDTH - 2.0 * MARGIN_X;
/// Fraction of a slot taken by its bar.
const BAR_FILL: f64 = 0.7;

/// Fill color of the category area chart.
pub const AREA_COLOR: &str = "#bff3ca";
/// Stroke color of the size line chart.
pub const LINE_COLOR: &str = "#d946ef";
/// Fill color of the brand bar chart.
pub const BAR_COLOR: &str = "#3b82f6";

/// Round a coordinate to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One labelled value, before layout.
#[derive(Debug, Clone, PartialEq)]
struct Sample {
    label: String,
    value: f64,
    value_label: String,
}

fn price_samples<K: ToString>(buckets: &[Bucket<K, Decimal>]) -> Vec<Sample> {
    buckets
        .iter()
        .map(|b| Sample {
            label: b.key.to_string(),
            value: b.value.to_f64().unwrap_or(0.0),
            value_label: format_idr(b.value),
        })
        .collect()
}

/// Height of `value` in plot units.
fn scaled(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        0.0
    } else {
        value / max * PLOT_HEIGHT
    }
}

fn max_value(samples: &[Sample]) -> f64 {
    samples.iter().map(|s| s.value).fold(0.0, f64::max)
}

/// X coordinate of the centre of slot `index` out of `count`.
#[allow(clippy::cast_precision_loss)] // chart series are small
fn slot_center(index: usize, count: usize) -> f64 {
    let slot = PLOT_WIDTH / count as f64;
    MARGIN_X + slot * (index as f64 + 0.5)
}

/// A point of an area or line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
}

fn markers(samples: Vec<Sample>) -> Vec<Marker> {
    let max = max_value(&samples);
    let count = samples.len();
    samples
        .into_iter()
        .enumerate()
        .map(|(i, s)| Marker {
            x: round1(slot_center(i, count)),
            y: round1(BASELINE - scaled(s.value, max)),
            label: s.label,
            value_label: s.value_label,
        })
        .collect()
}

fn polyline(markers: &[Marker]) -> String {
    markers
        .iter()
        .map(|m| format!("{},{}", m.x, m.y))
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Bar chart
// =============================================================================

/// A bar of a bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value_label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Centre of the bar, for labels.
    pub center: f64,
}

/// Vertical bar chart.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub color: &'static str,
}

impl BarChart {
    fn from_samples(samples: Vec<Sample>) -> Self {
        let max = max_value(&samples);
        let count = samples.len();
        let bars = samples
            .into_iter()
            .enumerate()
            .map(|(i, s)| {
                #[allow(clippy::cast_precision_loss)]
                let width = PLOT_WIDTH / count as f64 * BAR_FILL;
                let center = slot_center(i, count);
                let height = scaled(s.value, max);
                Bar {
                    x: round1(center - width / 2.0),
                    y: round1(BASELINE - height),
                    width: round1(width),
                    height: round1(height),
                    center: round1(center),
                    label: s.label,
                    value_label: s.value_label,
                }
            })
            .collect();

        Self {
            bars,
            color: BAR_COLOR,
        }
    }
}

// =============================================================================
// Area chart
// =============================================================================

/// Filled area chart.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaChart {
    pub markers: Vec<Marker>,
    /// `points` attribute of the filled polygon, closed along the baseline.
    pub polygon: String,
    pub color: &'static str,
}

impl AreaChart {
    fn from_samples(samples: Vec<Sample>) -> Self {
        let markers = markers(samples);
        let polygon = match (markers.first(), markers.last()) {
            (Some(first), Some(last)) => format!(
                "{},{BASELINE} {} {},{BASELINE}",
                first.x,
                polyline(&markers),
                last.x
            ),
            _ => String::new(),
        };

        Self {
            markers,
            polygon,
            color: AREA_COLOR,
        }
    }
}

// =============================================================================
// Line chart
// =============================================================================

/// Line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub markers: Vec<Marker>,
    /// `points` attribute of the polyline.
    pub points: String,
    pub color: &'static str,
}

impl LineChart {
    fn from_samples(samples: Vec<Sample>) -> Self {
        let markers = markers(samples);
        let points = polyline(&markers);

        Self {
            markers,
            points,
            color: LINE_COLOR,
        }
    }
}

// =============================================================================
// Dashboard charts
// =============================================================================

/// The three charts shown under the shoe table.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCharts {
    /// Mean price by brand.
    pub price_by_brand: BarChart,
    /// Number of shoes by category.
    pub count_by_category: AreaChart,
    /// Mean price by EU size, sizes ascending.
    pub price_by_size: LineChart,
    pub width: f64,
    pub height: f64,
    pub baseline: f64,
}

impl DashboardCharts {
    /// Build the charts for the rows currently shown.
    ///
    /// Returns `None` for an empty table.
    #[must_use]
    pub fn from_rows(rows: &[ShoeRecord]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }

        let categories = stats::count_by_category(rows)
            .into_iter()
            .map(|b| {
                #[allow(clippy::cast_precision_loss)]
                let value = b.value as f64;
                Sample {
                    label: b.key,
                    value,
                    value_label: b.value.to_string(),
                }
            })
            .collect();

        let brands = price_samples(&stats::mean_price_by_brand(rows));
        let sizes = price_samples(&stats::mean_price_by_size(rows));

        Some(Self {
            price_by_brand: BarChart::from_samples(brands),
            count_by_category: AreaChart::from_samples(categories),
            price_by_size: LineChart::from_samples(sizes),
            width: WIDTH,
            height: HEIGHT,
            baseline: BASELINE,
        })
    }
}
