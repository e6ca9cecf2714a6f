//! The layout pipeline.
//!
//! Each stage is a pure function of its inputs; a full pass recomputes
//! everything from scratch, so running it twice on identical inputs yields
//! structurally identical outputs.

mod extent;
mod orientation;
mod scale;
mod series;
mod stack;
pub(crate) mod types;

pub use scale::{BandScale, LinearScale, Scale};
pub use types::*;

use crate::config::{ChartConfig, LayoutMode, SeriesConfig};
use crate::error::{LayoutError, Result};
use crate::ir::{Record, Scalar};
use crate::theme::Theme;

/// Runs the full layout pass: series resolution, axis assignment,
/// stacking, extents, scales, group scale, and baseline.
pub fn compute_layout(
    data: &[Record],
    series_config: Option<&SeriesConfig>,
    theme: &Theme,
    config: &ChartConfig,
) -> Result<ChartLayout> {
    if data.is_empty() {
        return Err(LayoutError::EmptyData);
    }

    let series = series::resolve_series(series_config, data, theme)?;
    let axes = orientation::resolve_axes(&series, config.chart_type)?;
    let mode = config.mode();

    let stacked_data = match mode {
        LayoutMode::Stacked => stack::stack_series(data, &series, &axes),
        LayoutMode::Grouped | LayoutMode::Simple => Vec::new(),
    };

    // The stacked-derived extent is what callers observe; the scale domain
    // falls back to a direct scan whenever it is unset.
    let continuous_extent = extent::stacked_extent(&stacked_data);
    let scale_extent = if continuous_extent.is_unset() {
        extent::direct_extent(data, &series, &axes)
    } else {
        continuous_extent
    };
    if scale_extent.is_unset() {
        return Err(LayoutError::EmptyData);
    }

    let categories = ordinal_domain(data, &axes.ordinal_key);
    if categories.is_empty() {
        return Err(LayoutError::EmptyData);
    }

    let (ordinal_length, continuous_length) = match axes.ordinal_axis {
        Axis::X => (config.plot_width(), config.plot_height()),
        Axis::Y => (config.plot_height(), config.plot_width()),
    };

    let band = BandScale::new(categories, (0.0, ordinal_length));
    let linear_range = match axes.continuous_axis {
        Axis::X => (0.0, continuous_length),
        // y grows downward in pixel space
        Axis::Y => (continuous_length, 0.0),
    };
    let linear = LinearScale::new((scale_extent.min, scale_extent.max), linear_range);

    let group_scale = match mode {
        LayoutMode::Grouped => Some(scale::build_group_scale(&series, &axes, &band)),
        LayoutMode::Stacked | LayoutMode::Simple => None,
    };

    let baseline = locate_baseline(&linear);

    let data_extents = match axes.continuous_axis {
        Axis::X => DataExtents {
            x: Some(continuous_extent),
            y: None,
        },
        Axis::Y => DataExtents {
            x: None,
            y: Some(continuous_extent),
        },
    };

    let (x_scale, y_scale) = match axes.ordinal_axis {
        Axis::X => (Scale::Band(band), Scale::Linear(linear)),
        Axis::Y => (Scale::Linear(linear), Scale::Band(band)),
    };

    Ok(ChartLayout {
        series,
        axes,
        mode,
        stacked_data,
        data_extents,
        x_scale,
        y_scale,
        group_scale,
        baseline,
        plot_width: config.plot_width(),
        plot_height: config.plot_height(),
    })
}

/// Distinct ordinal-key values in first-seen order. Records without the
/// ordinal key are skipped.
fn ordinal_domain(data: &[Record], ordinal_key: &str) -> Vec<String> {
    let mut domain: Vec<String> = Vec::new();
    for record in data {
        let Some(value) = record.get(ordinal_key) else {
            continue;
        };
        let key = match value {
            Scalar::Text(s) => s.clone(),
            Scalar::Number(n) => n.to_string(),
        };
        if !domain.contains(&key) {
            domain.push(key);
        }
    }
    domain
}

/// A zero-reference line is needed only when bars extend to both sides of
/// zero; a pure origin-edge domain needs no extra reference.
fn locate_baseline(scale: &LinearScale) -> Option<f64> {
    let (min, max) = scale.domain();
    (min < 0.0 && max > 0.0).then(|| scale.map(0.0))
}
