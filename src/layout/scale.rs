//! Band and linear scales mapping data values to pixel positions.

use crate::layout::types::{AxisKind, AxisRoles, ResolvedSeriesConfig};

/// A discrete band scale over ordered category keys.
///
/// Each key gets an equal-width pixel segment; padding is expressed in
/// band-width units.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.0,
            padding_outer: 0.0,
        }
    }

    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Width of one band segment.
    pub fn bandwidth(&self) -> f64 {
        let n = self.domain.len() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let (r0, r1) = self.range;
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Leading edge of the band for `key`, or `None` for keys outside the
    /// domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        let index = self.domain.iter().position(|k| k == key)?;
        let (r0, r1) = self.range;
        let bw = self.bandwidth();
        let step = bw * (1.0 + self.padding_inner);
        let start = r0.min(r1);
        Some(start + bw * self.padding_outer + step * index as f64)
    }
}

/// A linear mapping from a continuous domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Maps a value from domain space into range space.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (value - d0) / denom;
        r0 + t * (r1 - r0)
    }

    /// Returns round-valued tick positions covering the domain, for the
    /// axis-rendering collaborator.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

fn nice_ticks(mut min: f64, mut max: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }
    let step = nice_step((max - min) / count.max(1) as f64);
    if step == 0.0 {
        return vec![min, max];
    }
    let start = (min / step).floor() * step;
    let stop = (max / step).ceil() * step;
    let n = ((stop - start) / step).round();
    if !n.is_finite() || n < 0.0 {
        return vec![min, max];
    }
    let n = n.min(10_000.0) as u64;
    (0..=n).map(|i| start + step * i as f64).collect()
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let base = 10_f64.powf(step.log10().floor());
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A constructed axis scale, band or linear.
#[derive(Debug, Clone, PartialEq)]
pub enum Scale {
    Band(BandScale),
    Linear(LinearScale),
}

impl Scale {
    pub fn kind(&self) -> AxisKind {
        match self {
            Self::Band(_) => AxisKind::Band,
            Self::Linear(_) => AxisKind::Linear,
        }
    }

    pub fn as_band(&self) -> Option<&BandScale> {
        match self {
            Self::Band(scale) => Some(scale),
            Self::Linear(_) => None,
        }
    }

    pub fn as_linear(&self) -> Option<&LinearScale> {
        match self {
            Self::Band(_) => None,
            Self::Linear(scale) => Some(scale),
        }
    }
}

/// Builds the grouped-mode sub-scale: same-category series laid side by
/// side inside one band of the categorical scale.
pub(super) fn build_group_scale(
    series: &ResolvedSeriesConfig,
    roles: &AxisRoles,
    band: &BandScale,
) -> BandScale {
    let domain = series
        .iter()
        .map(|s| s.value_field(roles).to_string())
        .collect();
    BandScale::new(domain, (0.0, band.bandwidth()))
}
