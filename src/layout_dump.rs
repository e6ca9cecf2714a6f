use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::layout::{Axis, AxisKind, BandScale, ChartLayout, LinearScale, Scale};

/// JSON-serializable snapshot of a computed layout, for tooling and
/// golden-file comparisons.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub mode: String,
    pub ordinal_key: String,
    pub x_axis_type: String,
    pub y_axis_type: String,
    pub plot_width: f64,
    pub plot_height: f64,
    pub series: Vec<SeriesDump>,
    pub stacked: Vec<StackedSeriesDump>,
    pub extents: ExtentsDump,
    pub x_scale: ScaleDump,
    pub y_scale: ScaleDump,
    pub group_scale: Option<BandScaleDump>,
    pub baseline: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct SeriesDump {
    pub name: String,
    pub x: String,
    pub y: String,
    pub color: String,
    pub negative_color: String,
    #[serde(rename = "type")]
    pub series_type: String,
}

#[derive(Debug, Serialize)]
pub struct StackedSeriesDump {
    pub key: String,
    pub index: usize,
    /// `[low, high, record]` triples in input-record order.
    pub intervals: Vec<(f64, f64, usize)>,
}

#[derive(Debug, Serialize)]
pub struct ExtentsDump {
    pub x: Option<[f64; 2]>,
    pub y: Option<[f64; 2]>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScaleDump {
    Band(BandScaleDump),
    Linear(LinearScaleDump),
}

#[derive(Debug, Serialize)]
pub struct BandScaleDump {
    pub domain: Vec<String>,
    pub range: [f64; 2],
    pub bandwidth: f64,
}

#[derive(Debug, Serialize)]
pub struct LinearScaleDump {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LayoutDump {
    pub fn from_layout(layout: &ChartLayout) -> Self {
        let axis_name = |kind: AxisKind| match kind {
            AxisKind::Band => "scaleBand".to_string(),
            AxisKind::Linear => "linear".to_string(),
        };

        LayoutDump {
            mode: format!("{:?}", layout.mode).to_lowercase(),
            ordinal_key: layout.axes.ordinal_key.clone(),
            x_axis_type: axis_name(layout.axis_kind(Axis::X)),
            y_axis_type: axis_name(layout.axis_kind(Axis::Y)),
            plot_width: layout.plot_width,
            plot_height: layout.plot_height,
            series: layout
                .series
                .iter()
                .map(|s| SeriesDump {
                    name: s.name.clone(),
                    x: s.x.clone(),
                    y: s.y.clone(),
                    color: s.color.clone(),
                    negative_color: s.negative_color.clone(),
                    series_type: s.series_type.to_string(),
                })
                .collect(),
            stacked: layout
                .stacked_data
                .iter()
                .map(|s| StackedSeriesDump {
                    key: s.key.clone(),
                    index: s.index,
                    intervals: s
                        .intervals
                        .iter()
                        .map(|i| (i.low, i.high, i.record))
                        .collect(),
                })
                .collect(),
            extents: ExtentsDump {
                x: layout.data_extents.x.map(|e| [e.min, e.max]),
                y: layout.data_extents.y.map(|e| [e.min, e.max]),
            },
            x_scale: dump_scale(&layout.x_scale),
            y_scale: dump_scale(&layout.y_scale),
            group_scale: layout.group_scale.as_ref().map(dump_band),
            baseline: layout.baseline,
        }
    }
}

fn dump_scale(scale: &Scale) -> ScaleDump {
    match scale {
        Scale::Band(band) => ScaleDump::Band(dump_band(band)),
        Scale::Linear(linear) => ScaleDump::Linear(dump_linear(linear)),
    }
}

fn dump_band(scale: &BandScale) -> BandScaleDump {
    let (r0, r1) = scale.range();
    BandScaleDump {
        domain: scale.domain().to_vec(),
        range: [r0, r1],
        bandwidth: scale.bandwidth(),
    }
}

fn dump_linear(scale: &LinearScale) -> LinearScaleDump {
    let (d0, d1) = scale.domain();
    let (r0, r1) = scale.range();
    LinearScaleDump {
        domain: [d0, d1],
        range: [r0, r1],
    }
}

pub fn write_layout_dump(path: &Path, layout: &ChartLayout) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
