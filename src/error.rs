use thiserror::Error;

pub type Result<T, E = LayoutError> = std::result::Result<T, E>;

/// Errors detected while resolving a chart configuration against its data.
///
/// Resolution is fail-fast: a layout pass that hits one of these produces no
/// partial scales. Numeric edge cases (zero values, per-record missing
/// values) are handled by fallback rules instead and never error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("series `{series}` references field `{field}` which is absent from the data")]
    MissingField { series: String, field: String },

    #[error(
        "series `{series}` resolves categorical field `{found}` but earlier series use `{expected}`"
    )]
    OrdinalKeyMismatch {
        series: String,
        expected: String,
        found: String,
    },

    #[error("chart data contains no usable values")]
    EmptyData,
}
