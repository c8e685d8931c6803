//! Scale Module
//! Categorical band scale and linear value scale used by the chart models.

/// Maps a finite set of categories to evenly spaced bands along an axis.
///
/// Same contract as a charting-library band scale with equal inner and outer
/// padding: `step = span / (n + padding)`, `bandwidth = step * (1 - padding)`,
/// with the leftover outer space centered.
#[derive(Clone, Debug)]
pub struct BandScale {
    domain: Vec<String>,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
        let n = domain.len() as f64;
        let span = range.1 - range.0;
        let step = span / (n + padding).max(1.0);
        let bandwidth = step * (1.0 - padding);
        let start = range.0 + (span - step * (n - padding)) * 0.5;
        Self {
            domain,
            start,
            step,
            bandwidth,
        }
    }

    /// Start position of the band for `key`, if it is in the domain.
    pub fn position(&self, key: &str) -> Option<f64> {
        self.domain
            .iter()
            .position(|k| k == key)
            .map(|i| self.start + self.step * i as f64)
    }

    /// Width of every band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }

    /// Index of the band containing `coord`, if any. Positions inside the
    /// padding gaps between bands resolve to `None`.
    pub fn band_at(&self, coord: f64) -> Option<usize> {
        for i in 0..self.domain.len() {
            let lo = self.start + self.step * i as f64;
            if coord >= lo && coord <= lo + self.bandwidth {
                return Some(i);
            }
        }
        None
    }
}

/// Linear interpolation from a numeric domain onto an output range.
/// The range may be inverted (larger input, smaller output).
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self {
            d0,
            d1,
            r0: range.0,
            r1: range.1,
        }
    }

    pub fn scale(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }
}
