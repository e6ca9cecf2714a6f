#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{
    ChartConfig, ChartOrientation, LayoutMode, Margin, SeriesConfig, SeriesDefinition,
};
pub use error::{LayoutError, Result};
pub use ir::{Record, Scalar};
pub use layout::{
    Axis, AxisKind, AxisRoles, BandScale, ChartLayout, DataExtents, Extent, LinearScale,
    ResolvedSeries, ResolvedSeriesConfig, Scale, StackedInterval, StackedSeries, compute_layout,
};
pub use theme::Theme;
