use crate::layout::scale::{BandScale, Scale};

/// A logical chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// What kind of scale an axis carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    Band,
    Linear,
}

/// Orientation resolved into data: which axis is categorical, which is
/// continuous, and the shared categorical field. Every downstream stage
/// consults this instead of branching on the orientation flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRoles {
    pub ordinal_key: String,
    pub ordinal_axis: Axis,
    pub continuous_axis: Axis,
}

impl AxisRoles {
    pub fn kind_of(&self, axis: Axis) -> AxisKind {
        if axis == self.ordinal_axis {
            AxisKind::Band
        } else {
            AxisKind::Linear
        }
    }
}

/// A fully populated series: no unset optionals left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSeries {
    pub name: String,
    pub x: String,
    pub y: String,
    pub color: String,
    pub negative_color: String,
    /// Always `"bar"`; carried so renderers shared with other chart types
    /// can dispatch on it.
    pub series_type: &'static str,
}

impl ResolvedSeries {
    /// The field holding this series' numeric measure.
    pub fn value_field(&self, roles: &AxisRoles) -> &str {
        match roles.ordinal_axis {
            Axis::X => &self.y,
            Axis::Y => &self.x,
        }
    }

    /// The field holding this series' categorical value.
    pub fn ordinal_field(&self, orientation_axis: Axis) -> &str {
        match orientation_axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Resolved series in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSeriesConfig {
    series: Vec<ResolvedSeries>,
}

impl ResolvedSeriesConfig {
    pub fn new(series: Vec<ResolvedSeries>) -> Self {
        Self { series }
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedSeries> {
        self.series.iter()
    }

    pub fn get(&self, name: &str) -> Option<&ResolvedSeries> {
        self.series.iter().find(|s| s.name == name)
    }
}

impl<'a> IntoIterator for &'a ResolvedSeriesConfig {
    type Item = &'a ResolvedSeries;
    type IntoIter = std::slice::Iter<'a, ResolvedSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// A signed, non-overlapping slice of one category's stack.
///
/// `low <= high` always holds; `record` indexes the originating record in
/// the input data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackedInterval {
    pub low: f64,
    pub high: f64,
    pub record: usize,
}

impl StackedInterval {
    pub fn length(&self) -> f64 {
        self.high - self.low
    }
}

/// One series' stacked intervals, in input-record order.
#[derive(Debug, Clone, PartialEq)]
pub struct StackedSeries {
    /// The series' value field name.
    pub key: String,
    /// Position of the series in configuration order.
    pub index: usize,
    pub intervals: Vec<StackedInterval>,
}

/// Value coverage of a continuous dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Sentinel for "no values observed". Must not be used as a scale
    /// domain; callers fall back to a direct scan over raw values.
    pub const UNSET: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub fn is_unset(&self) -> bool {
        self.min > self.max
    }

    pub fn include(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Widens the extent to contain zero, so bars originate from a shared
    /// baseline. No-op on the unset sentinel.
    pub fn anchor_zero(&mut self) {
        if !self.is_unset() {
            self.min = self.min.min(0.0);
            self.max = self.max.max(0.0);
        }
    }
}

/// Per-axis extents as exposed to callers. The ordinal axis has no
/// continuous extent; the continuous axis may still hold the unset
/// sentinel in non-stacked modes (see `ExtentCalculator`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataExtents {
    pub x: Option<Extent>,
    pub y: Option<Extent>,
}

/// Everything the rendering collaborator needs: resolved configuration,
/// axis roles, stacked intervals, extents, scales, and baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub series: ResolvedSeriesConfig,
    pub axes: AxisRoles,
    pub mode: crate::config::LayoutMode,
    pub stacked_data: Vec<StackedSeries>,
    pub data_extents: DataExtents,
    pub x_scale: Scale,
    pub y_scale: Scale,
    /// Sub-scale positioning same-category series side by side; present
    /// only in grouped mode.
    pub group_scale: Option<BandScale>,
    /// Pixel position of the zero line; present only when the continuous
    /// domain crosses zero.
    pub baseline: Option<f64>,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl ChartLayout {
    pub fn axis_kind(&self, axis: Axis) -> AxisKind {
        self.axes.kind_of(axis)
    }
}
