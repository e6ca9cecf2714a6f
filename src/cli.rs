use crate::config::{ChartConfig, ChartOrientation, Margin, load_series_config};
use crate::ir::Record;
use crate::layout::compute_layout;
use crate::layout_dump::{LayoutDump, write_layout_dump};
use crate::theme::Theme;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "blc",
    version,
    about = "Bar chart layout engine: computes scales, stacks, and baselines from JSON records"
)]
pub struct Args {
    /// Input data file (JSON array of records) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Layout dump output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Series config file (JSON5 map of series name -> {x, y, color?, negativeColor?})
    #[arg(short = 'c', long = "seriesConfig")]
    pub series_config: Option<PathBuf>,

    /// Chart orientation
    #[arg(short = 't', long = "chartType", value_enum, default_value = "column")]
    pub chart_type: ChartTypeArg,

    /// Lay same-category series side by side instead of stacking
    #[arg(long = "grouped")]
    pub grouped: bool,

    /// Disable stacking without grouping
    #[arg(long = "simple")]
    pub simple: bool,

    /// Width
    #[arg(short = 'w', long = "width", default_value_t = 800.0)]
    pub width: f64,

    /// Height
    #[arg(short = 'H', long = "height", default_value_t = 500.0)]
    pub height: f64,

    /// Margins as top,right,bottom,left
    #[arg(short = 'm', long = "margin", value_parser = parse_margin, default_value = "0,0,0,0")]
    pub margin: Margin,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ChartTypeArg {
    Column,
    Bar,
}

impl From<ChartTypeArg> for ChartOrientation {
    fn from(value: ChartTypeArg) -> Self {
        match value {
            ChartTypeArg::Column => Self::Column,
            ChartTypeArg::Bar => Self::Bar,
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();

    let input = read_input(args.input.as_deref())?;
    let data: Vec<Record> = serde_json::from_str(&input)?;
    let series_config = load_series_config(args.series_config.as_deref())?;

    let config = ChartConfig {
        chart_type: args.chart_type.into(),
        stacked: !args.simple,
        grouped: args.grouped,
        width: args.width,
        height: args.height,
        margin: args.margin,
    };

    let layout = compute_layout(&data, series_config.as_ref(), &Theme::default(), &config)?;

    match args.output {
        Some(path) => write_layout_dump(&path, &layout)?,
        None => {
            let dump = LayoutDump::from_layout(&layout);
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn parse_margin(raw: &str) -> Result<Margin, String> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return Err("expected four comma-separated values: top,right,bottom,left".to_string());
    }
    let mut values = [0.0_f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid margin value `{part}`"))?;
    }
    Ok(Margin {
        top: values[0],
        right: values[1],
        bottom: values[2],
        left: values[3],
    })
}
