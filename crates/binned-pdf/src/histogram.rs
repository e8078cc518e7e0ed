//! Uniform-bin histogram storage
//!
//! [`BinnedHistogram`] is the minimal histogram surface the PDF pipeline
//! needs: uniform bins over a fixed range, bin-content access by index or
//! coordinate, in-place smoothing and scaling. Both the cloned source
//! histogram and the dense lookup table are instances of this type.

use crate::error::{Error, Result};
use crate::smoothing::smooth_contents;
use std::fmt;

/// A named histogram with uniform bins over `[xmin, xmax]`
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedHistogram {
    name: String,
    xmin: f64,
    xmax: f64,
    contents: Vec<f64>,
}

impl BinnedHistogram {
    /// Create a histogram with `nbins` zeroed bins
    pub fn new(name: &str, xmin: f64, xmax: f64, nbins: usize) -> Result<Self> {
        Self::from_contents(name, xmin, xmax, vec![0.0; nbins])
    }

    /// Create a histogram from existing bin contents
    pub fn from_contents(name: &str, xmin: f64, xmax: f64, contents: Vec<f64>) -> Result<Self> {
        if contents.is_empty() {
            return Err(Error::EmptyHistogram);
        }
        if !xmin.is_finite() || !xmax.is_finite() || xmin >= xmax {
            return Err(Error::InvalidRange { xmin, xmax });
        }
        if contents.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFinite(format!("histogram '{name}' contents")));
        }
        Ok(Self {
            name: name.to_string(),
            xmin,
            xmax,
            contents,
        })
    }

    /// Histogram name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the histogram has no bins (cannot happen for a validated instance)
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Lower edge of the axis range
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Upper edge of the axis range
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Width of the axis range
    pub fn range(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Width of a single bin
    pub fn bin_width(&self) -> f64 {
        self.range() / self.contents.len() as f64
    }

    /// Center coordinate of bin `i`
    pub fn bin_center(&self, i: usize) -> f64 {
        self.xmin + (i as f64 + 0.5) * self.bin_width()
    }

    /// Content of bin `i`
    pub fn content(&self, i: usize) -> f64 {
        self.contents[i]
    }

    /// Set the content of bin `i`
    pub fn set_content(&mut self, i: usize, value: f64) {
        self.contents[i] = value;
    }

    /// All bin contents
    pub fn contents(&self) -> &[f64] {
        &self.contents
    }

    /// Index of the bin containing `x`, clamped to the valid index range
    ///
    /// Coordinates below `xmin` map to the first bin, coordinates at or
    /// above `xmax` to the last.
    pub fn find_bin(&self, x: f64) -> usize {
        let raw = ((x - self.xmin) / self.bin_width()).floor();
        if raw < 0.0 {
            0
        } else {
            (raw as usize).min(self.contents.len() - 1)
        }
    }

    /// Content-weighted mean of the bin centers
    pub fn mean(&self) -> f64 {
        let total: f64 = self.contents.iter().sum();
        if total == 0.0 {
            return 0.0;
        }
        let weighted: f64 = self
            .contents
            .iter()
            .enumerate()
            .map(|(i, &c)| c * self.bin_center(i))
            .sum();
        weighted / total
    }

    /// Fraction of bins with exactly zero content
    pub fn empty_fraction(&self) -> f64 {
        let empty = self.contents.iter().filter(|&&c| c == 0.0).count();
        empty as f64 / self.contents.len() as f64
    }

    /// Multiply every bin content by `factor`
    pub fn scale(&mut self, factor: f64) {
        for c in &mut self.contents {
            *c *= factor;
        }
    }

    /// Apply `iterations` passes of binwise kernel smoothing in place
    pub fn smooth(&mut self, iterations: usize) {
        smooth_contents(&mut self.contents, iterations);
    }
}

impl fmt::Display for BinnedHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BinnedHistogram('{}', {} bins, range=[{:.3}, {:.3}])",
            self.name,
            self.len(),
            self.xmin,
            self.xmax
        )
    }
}
