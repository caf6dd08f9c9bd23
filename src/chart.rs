//! Chart Specifications
//!
//! Declarative descriptions of visualizations. A [`ChartSpec`] carries
//! everything a rendering collaborator needs - kind, series data, axis
//! titles and display hints - and nothing it owns (no markup, no pixels).
//! Specs are produced fresh on every render and have no identity beyond
//! the current render.

use serde::{Deserialize, Serialize};

/// Default series colors, matched to the palette the original dashboards
/// shipped with so renderers stay visually consistent.
pub const SERIES_COLORS: [&str; 6] = [
    "#1f77b4", // Blue
    "#ff7f0e", // Orange
    "#2ca02c", // Green
    "#d62728", // Red
    "#9467bd", // Purple
    "#8c564b", // Brown
];

/// The visualization family a spec describes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Time/category series drawn as connected lines
    Line,
    /// Categorical bars, vertical by default
    Bar,
    /// Proportional slices
    Pie,
    /// Matrix of values colored by magnitude
    Heatmap,
    /// Hierarchy-free proportional rectangles
    Treemap,
}

/// How an individual series is drawn when it differs from the chart kind
///
/// Mixed charts (bars with a line overlay) set this per series; `None`
/// means "draw as the chart kind's default mark".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    Line,
    Bar,
}

/// Which y-axis a series is scaled against
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AxisSide {
    #[default]
    Primary,
    Secondary,
}

/// Bar layout when several bar series share categories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BarMode {
    #[default]
    Group,
    Stack,
    /// Bars drawn over each other (age pyramid)
    Overlay,
}

/// Axis description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AxisSpec {
    /// Axis title
    pub title: String,
    /// Render tick labels as absolute values (pyramid-style axes where
    /// one side holds negated data)
    #[serde(default)]
    pub absolute_ticks: bool,
}

impl AxisSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            absolute_ticks: false,
        }
    }

    pub fn absolute_ticks(mut self) -> Self {
        self.absolute_ticks = true;
        self
    }
}

/// One (category, value) observation within a series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub category: String,
    pub value: f64,
}

/// Per-series style hints for the renderer
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SeriesStyle {
    /// Explicit color; renderers fall back to [`SERIES_COLORS`] by index
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Dashed line (trend and comparison overlays)
    #[serde(default)]
    pub dashed: bool,
    /// Fill the area under a line series
    #[serde(default)]
    pub fill_area: bool,
    /// Print each point's value next to its mark
    #[serde(default)]
    pub show_values: bool,
    /// Category to emphasize against muted siblings (home-region bar in
    /// comparison charts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_category: Option<String>,
}

/// A labeled, ordered sequence of (category, value) pairs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Series {
    /// Series label, shown in legends and tooltips
    pub label: String,
    /// Ordered data points
    pub points: Vec<SeriesPoint>,
    /// Which y-axis this series is scaled against
    #[serde(default)]
    pub axis: AxisSide,
    /// Mark override for mixed charts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark: Option<Mark>,
    /// Style hints
    #[serde(default)]
    pub style: SeriesStyle,
}

impl Series {
    /// Create a series from pre-built points
    pub fn new(label: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            label: label.into(),
            points,
            axis: AxisSide::Primary,
            mark: None,
            style: SeriesStyle::default(),
        }
    }

    /// Create a series by zipping parallel category and value slices
    pub fn from_values(label: impl Into<String>, categories: &[&str], values: &[f64]) -> Self {
        let points = categories
            .iter()
            .zip(values.iter())
            .map(|(c, v)| SeriesPoint {
                category: c.to_string(),
                value: *v,
            })
            .collect();
        Self::new(label, points)
    }

    /// Builder method: scale against the secondary y-axis
    pub fn secondary_axis(mut self) -> Self {
        self.axis = AxisSide::Secondary;
        self
    }

    /// Builder method: draw as a line regardless of chart kind
    pub fn as_line(mut self) -> Self {
        self.mark = Some(Mark::Line);
        self
    }

    /// Builder method: draw as bars regardless of chart kind
    pub fn as_bar(mut self) -> Self {
        self.mark = Some(Mark::Bar);
        self
    }

    /// Builder method: set an explicit color
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    /// Builder method: dashed line
    pub fn dashed(mut self) -> Self {
        self.style.dashed = true;
        self
    }

    /// Builder method: fill the area under the line
    pub fn fill_area(mut self) -> Self {
        self.style.fill_area = true;
        self
    }

    /// Builder method: print point values next to marks
    pub fn show_values(mut self) -> Self {
        self.style.show_values = true;
        self
    }

    /// Builder method: emphasize one category
    pub fn highlight(mut self, category: impl Into<String>) -> Self {
        self.style.highlight_category = Some(category.into());
        self
    }

    /// The raw values of this series in order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// A horizontal reference line across the chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceLine {
    /// Y value the line sits at
    pub value: f64,
    /// Annotation label (e.g. "Average: 8.6")
    pub label: String,
    /// Dashed stroke
    #[serde(default)]
    pub dashed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A text annotation anchored at a category position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Annotation {
    /// Category (x position) the annotation points at
    pub category: String,
    /// Annotation text (e.g. "+4.2%")
    pub text: String,
}

/// Chart-level display options
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayOptions {
    /// Show the legend
    pub show_legend: bool,
    /// Horizontal bars (category axis vertical)
    #[serde(default)]
    pub horizontal: bool,
    /// Bar layout for multi-series bar charts
    #[serde(default)]
    pub bar_mode: BarMode,
    /// Fixed value range (heatmap color scales)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_range: Option<(f64, f64)>,
    /// Donut hole for pie charts
    #[serde(default)]
    pub donut: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_legend: true,
            horizontal: false,
            bar_mode: BarMode::default(),
            value_range: None,
            donut: false,
        }
    }
}

/// A complete declarative chart description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartSpec {
    /// Visualization family
    pub kind: ChartKind,
    /// Chart title
    pub title: String,
    /// X-axis description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisSpec>,
    /// Primary y-axis description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisSpec>,
    /// Secondary y-axis description, present when any series targets it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_y_axis: Option<AxisSpec>,
    /// Ordered data series
    pub series: Vec<Series>,
    /// Horizontal reference lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference_lines: Vec<ReferenceLine>,
    /// Text annotations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
    /// Display options
    #[serde(default)]
    pub options: DisplayOptions,
}

impl ChartSpec {
    /// Create an empty spec of the given kind
    pub fn new(kind: ChartKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            x_axis: None,
            y_axis: None,
            secondary_y_axis: None,
            series: Vec::new(),
            reference_lines: Vec::new(),
            annotations: Vec::new(),
            options: DisplayOptions::default(),
        }
    }

    /// Builder method: set the x-axis title
    pub fn x_axis(mut self, title: impl Into<String>) -> Self {
        self.x_axis = Some(AxisSpec::new(title));
        self
    }

    /// Builder method: set the primary y-axis title
    pub fn y_axis(mut self, title: impl Into<String>) -> Self {
        self.y_axis = Some(AxisSpec::new(title));
        self
    }

    /// Builder method: set the secondary y-axis title
    pub fn secondary_y_axis(mut self, title: impl Into<String>) -> Self {
        self.secondary_y_axis = Some(AxisSpec::new(title));
        self
    }

    /// Builder method: replace the x-axis with a custom spec
    pub fn x_axis_spec(mut self, axis: AxisSpec) -> Self {
        self.x_axis = Some(axis);
        self
    }

    /// Builder method: append a series
    pub fn series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    /// Builder method: append a dashed reference line
    pub fn reference_line(mut self, value: f64, label: impl Into<String>) -> Self {
        self.reference_lines.push(ReferenceLine {
            value,
            label: label.into(),
            dashed: true,
            color: None,
        });
        self
    }

    /// Builder method: append an annotation
    pub fn annotation(mut self, category: impl Into<String>, text: impl Into<String>) -> Self {
        self.annotations.push(Annotation {
            category: category.into(),
            text: text.into(),
        });
        self
    }

    /// Builder method: toggle the legend
    pub fn legend(mut self, show: bool) -> Self {
        self.options.show_legend = show;
        self
    }

    /// Builder method: horizontal bars
    pub fn horizontal(mut self) -> Self {
        self.options.horizontal = true;
        self
    }

    /// Builder method: bar layout
    pub fn bar_mode(mut self, mode: BarMode) -> Self {
        self.options.bar_mode = mode;
        self
    }

    /// Builder method: fixed value range
    pub fn value_range(mut self, min: f64, max: f64) -> Self {
        self.options.value_range = Some((min, max));
        self
    }

    /// Builder method: donut hole
    pub fn donut(mut self) -> Self {
        self.options.donut = true;
        self
    }

    /// True when no series carries any points.
    ///
    /// An empty-but-valid spec is the defined result of filtering down to
    /// zero rows; renderers must tolerate it.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.points.is_empty())
    }
}
