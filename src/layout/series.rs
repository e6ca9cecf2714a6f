//! Merges user-supplied series definitions with defaults.

use crate::config::SeriesConfig;
use crate::error::{LayoutError, Result};
use crate::ir::{self, Record};
use crate::layout::types::{ResolvedSeries, ResolvedSeriesConfig};
use crate::theme::Theme;

/// Conventional field names used when no configuration is supplied: one
/// series measuring `"y"` across categories in `"x"`.
const DEFAULT_ORDINAL_FIELD: &str = "x";
const DEFAULT_VALUE_FIELD: &str = "y";

/// Resolves the series configuration: synthesizes a default single series
/// when none is given, fills colors from the palette by series position,
/// and validates field references against the data schema.
pub(super) fn resolve_series(
    config: Option<&SeriesConfig>,
    data: &[Record],
    theme: &Theme,
) -> Result<ResolvedSeriesConfig> {
    let mut resolved = Vec::new();

    match config {
        Some(config) if !config.is_empty() => {
            for (index, (name, def)) in config.iter().enumerate() {
                let color = def
                    .color
                    .clone()
                    .unwrap_or_else(|| theme.color_for(index));
                let negative_color = def.negative_color.clone().unwrap_or_else(|| color.clone());
                resolved.push(ResolvedSeries {
                    name: name.to_string(),
                    x: def.x.clone(),
                    y: def.y.clone(),
                    color,
                    negative_color,
                    series_type: "bar",
                });
            }
        }
        // An absent (or empty) configuration falls back to one
        // conventional series, keeping the downstream shape uniform.
        _ => {
            let color = theme.color_for(0);
            resolved.push(ResolvedSeries {
                name: DEFAULT_VALUE_FIELD.to_string(),
                x: DEFAULT_ORDINAL_FIELD.to_string(),
                y: DEFAULT_VALUE_FIELD.to_string(),
                color: color.clone(),
                negative_color: color,
                series_type: "bar",
            });
        }
    }

    let fields = ir::schema(data);
    for series in &resolved {
        for field in [&series.x, &series.y] {
            if !fields.contains(field.as_str()) {
                return Err(LayoutError::MissingField {
                    series: series.name.clone(),
                    field: field.clone(),
                });
            }
        }
    }

    Ok(ResolvedSeriesConfig::new(resolved))
}
