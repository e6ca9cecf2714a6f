//! Diverging sign-partitioned stacking.
//!
//! Positive and negative contributions accumulate into two independent
//! zero-anchored towers per category, so a shared zero baseline stays
//! meaningful when series mix signs. A single cumulative sum would make
//! bars for later series start at a sign-polluted offset instead.

use crate::ir::{self, Record};
use crate::layout::types::{AxisRoles, ResolvedSeriesConfig, StackedInterval, StackedSeries};

/// Stacks each series' values on top of the running totals for its sign.
///
/// Series are processed in configuration order; each record keeps its own
/// pair of running totals. Records missing the value field (or holding a
/// non-numeric scalar) contribute zero.
pub(super) fn stack_series(
    data: &[Record],
    series: &ResolvedSeriesConfig,
    roles: &AxisRoles,
) -> Vec<StackedSeries> {
    let mut positive = vec![0.0_f64; data.len()];
    let mut negative = vec![0.0_f64; data.len()];

    series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            let key = s.value_field(roles).to_string();
            let intervals = data
                .iter()
                .enumerate()
                .map(|(record, row)| {
                    let value = ir::numeric_field(row, &key).unwrap_or(0.0);
                    let (low, high) = if value > 0.0 {
                        let base = positive[record];
                        positive[record] += value;
                        (base, base + value)
                    } else if value < 0.0 {
                        let base = negative[record];
                        negative[record] += value;
                        (base + value, base)
                    } else {
                        (0.0, 0.0)
                    };
                    StackedInterval { low, high, record }
                })
                .collect();
            StackedSeries {
                key,
                index,
                intervals,
            }
        })
        .collect()
}
