//! Baseline-vs-projection bar charts.
//!
//! [`build_comparison_chart`] is the one chart-building routine. It turns a
//! [`ComparisonSpec`] into a backend-independent [`BarChart`] that both the
//! embedded egui panel and the standalone PNG export draw from, so the two
//! renderings always share colours, scales and label formats.

use simulation::labels::ChartText;
use simulation::{Baseline, DashboardLabels, ProjectedIndicators};

use crate::format::ValueFormat;
use crate::palette::{Rgb, CHART_COLORS};

/// Bar width in category units (categories sit at x = 0 and x = 1).
pub const BAR_WIDTH: f64 = 0.6;
/// Headroom above the tallest bar.
pub const CEILING_HEADROOM: f64 = 1.15;
/// Annotations sit this fraction of the bar's height above its top.
pub const LABEL_OFFSET_FRACTION: f64 = 0.05;
/// Horizontal padding around the bars, as a fraction of their data span.
const X_MARGIN_FRACTION: f64 = 0.05;
/// Aim for roughly this many y-axis tick intervals.
const TARGET_TICKS: f64 = 6.0;

// ---------------------------------------------------------------------------
// Metrics
// ---------------------------------------------------------------------------

/// The three chartable metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    AvoidedEmissions,
    WaterSaved,
    EstimatedRevenue,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::AvoidedEmissions,
        Metric::WaterSaved,
        Metric::EstimatedRevenue,
    ];

    /// Lowest allowed y-axis ceiling, keeping the axis non-degenerate.
    pub fn min_ceiling(self) -> f64 {
        match self {
            Metric::AvoidedEmissions | Metric::WaterSaved => 1.0,
            Metric::EstimatedRevenue => 1000.0,
        }
    }

    pub fn value_format(self) -> ValueFormat {
        match self {
            Metric::AvoidedEmissions | Metric::WaterSaved => ValueFormat::Decimal2,
            Metric::EstimatedRevenue => ValueFormat::Currency,
        }
    }

    /// (baseline, projection) bar colours.
    pub fn colors(self) -> [Rgb; 2] {
        match self {
            Metric::AvoidedEmissions => [CHART_COLORS[0], CHART_COLORS[1]],
            Metric::WaterSaved => [CHART_COLORS[2], CHART_COLORS[3]],
            Metric::EstimatedRevenue => [CHART_COLORS[1], CHART_COLORS[0]],
        }
    }

    pub fn text(self, labels: &DashboardLabels) -> &ChartText {
        match self {
            Metric::AvoidedEmissions => &labels.emissions_chart,
            Metric::WaterSaved => &labels.water_chart,
            Metric::EstimatedRevenue => &labels.revenue_chart,
        }
    }

    /// (baseline, projection) values in the chart's display unit.
    pub fn values(self, baseline: &Baseline, indicators: &ProjectedIndicators) -> (f64, f64) {
        match self {
            Metric::AvoidedEmissions => (baseline.avoided_emissions, indicators.avoided_emissions),
            Metric::WaterSaved => (baseline.water_saved_m3, indicators.water_saved_m3()),
            Metric::EstimatedRevenue => (baseline.estimated_revenue, indicators.estimated_revenue),
        }
    }

    /// Download file name, `{stem}.png`.
    pub fn file_name(self, labels: &DashboardLabels) -> String {
        format!("{}.png", self.text(labels).export_stem)
    }

    pub fn spec(
        self,
        labels: &DashboardLabels,
        baseline: &Baseline,
        indicators: &ProjectedIndicators,
    ) -> ComparisonSpec {
        let text = self.text(labels);
        let (baseline_value, projection_value) = self.values(baseline, indicators);
        ComparisonSpec {
            title: text.title.clone(),
            y_label: text.y_label.clone(),
            categories: [
                labels.baseline_category.clone(),
                labels.projection_category.clone(),
            ],
            baseline: baseline_value,
            projection: projection_value,
            format: self.value_format(),
            min_ceiling: self.min_ceiling(),
            colors: self.colors(),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart model
// ---------------------------------------------------------------------------

/// Everything needed to draw one baseline-vs-projection chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSpec {
    pub title: String,
    pub y_label: String,
    /// Category names, baseline first.
    pub categories: [String; 2],
    pub baseline: f64,
    pub projection: f64,
    pub format: ValueFormat,
    pub min_ceiling: f64,
    pub colors: [Rgb; 2],
}

/// Render target of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartMode {
    /// One sub-panel of the combined three-panel figure.
    Panel,
    /// Single-chart figure for image export.
    Standalone,
}

impl ChartMode {
    /// Figure size in inches.
    pub fn figure_size_in(self) -> (f32, f32) {
        match self {
            ChartMode::Panel => (20.0 / 3.0, 7.0),
            ChartMode::Standalone => (8.0, 6.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub category: String,
    /// Bar centre in data coordinates.
    pub center: f64,
    pub width: f64,
    pub height: f64,
    pub color: Rgb,
}

impl Bar {
    pub fn left(&self) -> f64 {
        self.center - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

/// Value text anchored bottom-centre at (`x`, `y`) in data coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub mode: ChartMode,
    pub bars: [Bar; 2],
    pub annotations: [Annotation; 2],
    /// The y axis always starts at 0.
    pub y_max: f64,
    pub y_ticks: Vec<f64>,
    pub x_min: f64,
    pub x_max: f64,
}

impl BarChart {
    pub fn y_min(&self) -> f64 {
        0.0
    }

    /// Position of `x` across the plot area, 0 at the left edge, 1 at the right.
    pub fn x_fraction(&self, x: f64) -> f64 {
        (x - self.x_min) / (self.x_max - self.x_min)
    }

    /// Height of `y` within the plot area, 0 at the floor, 1 at the ceiling.
    pub fn y_fraction(&self, y: f64) -> f64 {
        (y - self.y_min()) / (self.y_max - self.y_min())
    }

    /// Spacing between consecutive y ticks.
    pub fn tick_step(&self) -> f64 {
        match self.y_ticks.as_slice() {
            [a, b, ..] => b - a,
            _ => self.y_max,
        }
    }
}

/// Y-axis ceiling: 15 % above the tallest value, never below `min_ceiling`.
pub fn axis_ceiling(values: &[f64], min_ceiling: f64) -> f64 {
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    (max_value * CEILING_HEADROOM).max(min_ceiling)
}

/// Tick positions from 0 up to `y_max` at a 1/2/2.5/5 × 10^k step.
pub fn nice_ticks(y_max: f64) -> Vec<f64> {
    if !y_max.is_finite() || y_max <= 0.0 {
        return vec![0.0];
    }

    let raw_step = y_max / TARGET_TICKS;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|&s| s >= raw_step)
        .unwrap_or(10.0 * magnitude);

    let count = (y_max / step + 1e-9).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}

/// Build the chart for `spec` in the given render `mode`.
pub fn build_comparison_chart(spec: &ComparisonSpec, mode: ChartMode) -> BarChart {
    let values = [spec.baseline, spec.projection];
    let y_max = axis_ceiling(&values, spec.min_ceiling);

    let bars: [Bar; 2] = std::array::from_fn(|i| Bar {
        category: spec.categories[i].clone(),
        center: i as f64,
        width: BAR_WIDTH,
        height: values[i],
        color: spec.colors[i],
    });

    let annotations: [Annotation; 2] = std::array::from_fn(|i| Annotation {
        x: bars[i].center,
        y: values[i] + LABEL_OFFSET_FRACTION * values[i],
        text: spec.format.format(values[i]),
    });

    let data_left = bars[0].left();
    let data_right = bars[1].right();
    let margin = (data_right - data_left) * X_MARGIN_FRACTION;

    BarChart {
        title: spec.title.clone(),
        y_label: spec.y_label.clone(),
        mode,
        y_ticks: nice_ticks(y_max),
        bars,
        annotations,
        y_max,
        x_min: data_left - margin,
        x_max: data_right + margin,
    }
}

/// Build all three charts, in [`Metric::ALL`] order.
pub fn build_metric_charts(
    labels: &DashboardLabels,
    baseline: &Baseline,
    indicators: &ProjectedIndicators,
    mode: ChartMode,
) -> Vec<(Metric, BarChart)> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let spec = metric.spec(labels, baseline, indicators);
            (metric, build_comparison_chart(&spec, mode))
        })
        .collect()
}
