//! Continuous-axis extent derivation.
//!
//! Stacked layouts read the extent off the computed intervals; everything
//! else scans raw per-series values directly, force-including zero so bars
//! always originate from a shared baseline. The stacked-derived extent is
//! an internal optimization only: when no intervals exist it stays at the
//! unset sentinel and scale construction falls back to the direct scan.

use crate::ir::{self, Record};
use crate::layout::types::{AxisRoles, Extent, ResolvedSeriesConfig, StackedSeries};

/// Extent over every stacked interval. Zero-anchoring holds automatically
/// because each sign's tower starts at zero.
pub(super) fn stacked_extent(stacked: &[StackedSeries]) -> Extent {
    let mut extent = Extent::UNSET;
    for series in stacked {
        for interval in &series.intervals {
            extent.include(interval.low);
            extent.include(interval.high);
        }
    }
    extent
}

/// Zero-anchored extent over raw per-series values. Records without a
/// numeric value for a series are skipped.
pub(super) fn direct_extent(
    data: &[Record],
    series: &ResolvedSeriesConfig,
    roles: &AxisRoles,
) -> Extent {
    let mut extent = Extent::UNSET;
    for s in series {
        let field = s.value_field(roles);
        for record in data {
            if let Some(value) = ir::numeric_field(record, field) {
                extent.include(value);
            }
        }
    }
    extent.anchor_zero();
    extent
}
