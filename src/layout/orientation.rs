//! Resolves the orientation flag into axis roles and the ordinal key.

use crate::config::ChartOrientation;
use crate::error::{LayoutError, Result};
use crate::layout::types::{Axis, AxisRoles, ResolvedSeriesConfig};

/// Determines which axis is categorical and extracts the shared ordinal
/// key. All series must agree on the categorical field.
pub(super) fn resolve_axes(
    series: &ResolvedSeriesConfig,
    orientation: ChartOrientation,
) -> Result<AxisRoles> {
    let (ordinal_axis, continuous_axis) = match orientation {
        ChartOrientation::Column => (Axis::X, Axis::Y),
        ChartOrientation::Bar => (Axis::Y, Axis::X),
    };

    let mut iter = series.iter();
    // resolve_series never yields an empty configuration
    let first = iter.next().ok_or(LayoutError::EmptyData)?;
    let ordinal_key = first.ordinal_field(ordinal_axis).to_string();

    for other in iter {
        let found = other.ordinal_field(ordinal_axis);
        if found != ordinal_key {
            return Err(LayoutError::OrdinalKeyMismatch {
                series: other.name.clone(),
                expected: ordinal_key,
                found: found.to_string(),
            });
        }
    }

    Ok(AxisRoles {
        ordinal_key,
        ordinal_axis,
        continuous_axis,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::types::{AxisKind, ResolvedSeries};

    fn series(name: &str, x: &str, y: &str) -> ResolvedSeries {
        ResolvedSeries {
            name: name.to_string(),
            x: x.to_string(),
            y: y.to_string(),
            color: "#333".to_string(),
            negative_color: "#333".to_string(),
            series_type: "bar",
        }
    }

    #[test]
    fn column_orientation_puts_categories_on_x() {
        let config = ResolvedSeriesConfig::new(vec![series("y", "x", "y")]);
        let roles = resolve_axes(&config, ChartOrientation::Column).unwrap();
        assert_eq!(roles.ordinal_key, "x");
        assert_eq!(roles.ordinal_axis, Axis::X);
        assert_eq!(roles.continuous_axis, Axis::Y);
        assert_eq!(roles.kind_of(Axis::X), AxisKind::Band);
        assert_eq!(roles.kind_of(Axis::Y), AxisKind::Linear);
    }

    #[test]
    fn bar_orientation_swaps_axis_roles() {
        let config = ResolvedSeriesConfig::new(vec![series("bars", "val", "ord")]);
        let roles = resolve_axes(&config, ChartOrientation::Bar).unwrap();
        assert_eq!(roles.ordinal_key, "ord");
        assert_eq!(roles.ordinal_axis, Axis::Y);
        assert_eq!(roles.kind_of(Axis::X), AxisKind::Linear);
    }

    #[test]
    fn disagreeing_ordinal_keys_are_rejected() {
        let config = ResolvedSeriesConfig::new(vec![
            series("bar1", "x", "y"),
            series("bar2", "other", "y1"),
        ]);
        let err = resolve_axes(&config, ChartOrientation::Column).unwrap_err();
        assert_eq!(
            err,
            LayoutError::OrdinalKeyMismatch {
                series: "bar2".to_string(),
                expected: "x".to_string(),
                found: "other".to_string(),
            }
        );
    }
}
