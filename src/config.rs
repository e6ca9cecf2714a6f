use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// User-supplied definition of one bar series.
///
/// `x` and `y` name data fields; which of the two is the categorical field
/// is decided by the chart orientation. Colors are optional and fall back
/// to the theme palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesDefinition {
    pub x: String,
    pub y: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(
        default,
        rename = "negativeColor",
        skip_serializing_if = "Option::is_none"
    )]
    pub negative_color: Option<String>,
}

/// Ordered mapping from series name to definition.
///
/// Series are processed in the order they appear in the configuration
/// document, so this preserves insertion order rather than sorting keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesConfig {
    entries: Vec<(String, SeriesDefinition)>,
}

impl SeriesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, definition: SeriesDefinition) {
        self.entries.push((name.into(), definition));
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesDefinition)> {
        self.entries.iter().map(|(name, def)| (name.as_str(), def))
    }
}

impl Serialize for SeriesConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, def) in &self.entries {
            map.serialize_entry(name, def)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SeriesConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ConfigVisitor;

        impl<'de> Visitor<'de> for ConfigVisitor {
            type Value = SeriesConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of series name to series definition")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, SeriesDefinition>()? {
                    entries.push(entry);
                }
                Ok(SeriesConfig { entries })
            }
        }

        deserializer.deserialize_map(ConfigVisitor)
    }
}

/// Chart orientation: `column` puts categories on the x axis, `bar` on the
/// y axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartOrientation {
    #[default]
    Column,
    Bar,
}

/// Per-category layout of multi-series values, resolved from the
/// stacked/grouped flags. Grouping takes precedence over stacking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    Stacked,
    Grouped,
    Simple,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub chart_type: ChartOrientation,
    pub stacked: bool,
    pub grouped: bool,
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            chart_type: ChartOrientation::Column,
            stacked: true,
            grouped: false,
            width: 800.0,
            height: 500.0,
            margin: Margin::default(),
        }
    }
}

impl ChartConfig {
    pub fn mode(&self) -> LayoutMode {
        if self.grouped {
            LayoutMode::Grouped
        } else if self.stacked {
            LayoutMode::Stacked
        } else {
            LayoutMode::Simple
        }
    }

    /// Horizontal pixel span left for the plot after margins.
    pub fn plot_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Vertical pixel span left for the plot after margins.
    pub fn plot_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }
}

/// Loads a series configuration from a JSON5 file. JSON5 keeps hand-authored
/// configs lenient (comments, trailing commas, unquoted keys).
pub fn load_series_config(path: Option<&Path>) -> anyhow::Result<Option<SeriesConfig>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let contents = std::fs::read_to_string(path)?;
    let parsed = json5::from_str(&contents)?;
    Ok(Some(parsed))
}
