//! Spline-smoothed PDF estimation from binned histograms
//!
//! [`HistogramPdf`] turns an empirical histogram into a normalized density
//! estimate: the input is cloned, optionally smoothed, fitted with a spline
//! through its (bin center, bin content) pairs, rasterized into a dense
//! lookup table, and rescaled so the integral over the axis range is one.
//! All queries after construction read the lookup table; the spline itself
//! is never evaluated again.

use crate::error::{Error, Result};
use crate::histogram::BinnedHistogram;
use splinefit::{
    ControlPoints, CubicSpline, CurveFit, LinearSpline, QuadraticSpline, QuinticSpline,
};
use tracing::{debug, warn};

/// Default density floor: lookup values and query results never fall below this
pub const EPSILON: f64 = 0.01;

/// Default resolution of the dense lookup table
pub const DENSE_BINS: usize = 10_000;

/// Step count of the midpoint Riemann sum used for interval integration
const INTEGRATION_STEPS: usize = 10_000;

/// Interpolation variant used to fit the histogram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SmoothMethod {
    /// Piecewise-linear interpolation
    Spline1,
    /// Piecewise-quadratic interpolation
    #[default]
    Spline2,
    /// Natural cubic spline
    Spline3,
    /// Piecewise-quintic interpolation
    Spline5,
}

impl SmoothMethod {
    /// Map a numeric method code (1, 2, 3 or 5) to its variant
    ///
    /// Unrecognized codes log a warning and fall back to the cubic spline.
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => Self::Spline1,
            2 => Self::Spline2,
            3 => Self::Spline3,
            5 => Self::Spline5,
            other => {
                warn!(
                    "no valid interpolation method for code {}, using Spline3",
                    other
                );
                Self::Spline3
            }
        }
    }
}

/// Configuration for [`HistogramPdf`] construction
#[derive(Debug, Clone, PartialEq)]
pub struct PdfConfig {
    /// Interpolation variant
    pub method: SmoothMethod,
    /// Number of in-place smoothing passes applied to the cloned histogram
    /// before fitting; 0 disables smoothing
    pub smoothing_iterations: usize,
    /// Density floor; must be positive
    pub epsilon: f64,
    /// Resolution of the dense lookup table; must be at least 2
    pub dense_bins: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            method: SmoothMethod::default(),
            smoothing_iterations: 0,
            epsilon: EPSILON,
            dense_bins: DENSE_BINS,
        }
    }
}

impl PdfConfig {
    /// Create a configuration with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interpolation variant
    pub fn with_method(mut self, method: SmoothMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the number of smoothing passes
    pub fn with_smoothing(mut self, iterations: usize) -> Self {
        self.smoothing_iterations = iterations;
        self
    }

    /// Set the density floor
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the lookup table resolution
    pub fn with_dense_bins(mut self, dense_bins: usize) -> Self {
        self.dense_bins = dense_bins;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if self.dense_bins < 2 {
            return Err(Error::InvalidParameter(format!(
                "dense_bins must be at least 2, got {}",
                self.dense_bins
            )));
        }
        Ok(())
    }
}

/// A normalized probability density estimate over a bounded interval
///
/// Immutable after construction; point and interval queries are pure reads,
/// so a constructed instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct HistogramPdf {
    /// Owned (possibly smoothed) copy of the input histogram
    source: BinnedHistogram,
    /// Dense rasterization of the fitted spline, rescaled to unit integral
    lookup: BinnedHistogram,
    /// Source name concatenated with the spline variant label
    label: String,
    /// Integral of the unnormalized lookup table over the full range
    normalization: f64,
    epsilon: f64,
}

impl HistogramPdf {
    /// Build a PDF from a histogram with the given configuration
    ///
    /// Runs the full pipeline: clone, diagnostic checks, optional smoothing,
    /// spline fit, dense resampling with the epsilon floor, normalization.
    pub fn new(hist: &BinnedHistogram, config: &PdfConfig) -> Result<Self> {
        config.validate()?;

        let mut source = hist.clone();
        check_source(&source);

        if config.smoothing_iterations > 0 {
            source.smooth(config.smoothing_iterations);
        }

        let points = ControlPoints::from_pairs(
            (0..source.len()).map(|i| (source.bin_center(i), source.content(i))),
        )?;
        let spline: Box<dyn CurveFit> = match config.method {
            SmoothMethod::Spline1 => Box::new(LinearSpline::new(points)?),
            SmoothMethod::Spline2 => Box::new(QuadraticSpline::new(points)?),
            SmoothMethod::Spline3 => Box::new(CubicSpline::new(points)?),
            SmoothMethod::Spline5 => Box::new(QuinticSpline::new(points)?),
        };
        let label = format!("{}_{}", source.name(), spline.label());

        let lookup = fill_spline_to_hist(
            &label,
            spline.as_ref(),
            &source,
            config.dense_bins,
            config.epsilon,
        )?;

        let mut pdf = Self {
            source,
            lookup,
            label,
            normalization: 1.0,
            epsilon: config.epsilon,
        };

        let mut integral = pdf.integral(pdf.xmin(), pdf.xmax());
        if integral <= 0.0 {
            integral = 1.0;
        }
        pdf.lookup.scale(1.0 / integral);
        pdf.normalization = integral;

        debug!(
            "built PDF '{}': {} < x < {} from {} source bins, normalization {}",
            pdf.label,
            pdf.xmin(),
            pdf.xmax(),
            pdf.source.len(),
            pdf.normalization
        );
        Ok(pdf)
    }

    /// Density estimate at `x`
    ///
    /// Coordinates outside `[xmin, xmax]` are clamped to the range, so the
    /// boundary value is returned instead of extrapolating. The result is
    /// floored at epsilon; this path never fails.
    pub fn value_at(&self, x: f64) -> f64 {
        let x = x.clamp(self.xmin(), self.xmax());
        let last = self.lookup.len() - 1;
        let bin = self.lookup.find_bin(x);

        // Step toward x relative to the bin center; the two extreme bins
        // always step inward.
        let next = if (x > self.lookup.bin_center(bin) && bin != last) || bin == 0 {
            bin + 1
        } else {
            bin - 1
        };

        let dx = self.lookup.bin_center(bin) - self.lookup.bin_center(next);
        let dy = self.lookup.content(bin) - self.lookup.content(next);
        let value = self.lookup.content(bin) + (x - self.lookup.bin_center(bin)) * dy / dx;

        value.max(self.epsilon)
    }

    /// Integral of the density over `[a, b]`
    ///
    /// Midpoint Riemann sum over 10,000 steps, evaluated through
    /// [`Self::value_at`]. For a constructed PDF the full-range integral is
    /// approximately one.
    pub fn integral(&self, a: f64, b: f64) -> f64 {
        let step = (b - a) / INTEGRATION_STEPS as f64;
        let mut sum = 0.0;
        for i in 0..INTEGRATION_STEPS {
            sum += self.value_at(a + (i as f64 + 0.5) * step);
        }
        sum * step
    }

    /// Lower edge of the domain
    pub fn xmin(&self) -> f64 {
        self.lookup.xmin()
    }

    /// Upper edge of the domain
    pub fn xmax(&self) -> f64 {
        self.lookup.xmax()
    }

    /// The normalization constant the lookup table was divided by
    pub fn normalization(&self) -> f64 {
        self.normalization
    }

    /// The density floor in effect for this instance
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Display label: source histogram name plus the spline variant label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The normalized dense lookup table
    pub fn lookup_table(&self) -> &BinnedHistogram {
        &self.lookup
    }

    /// The owned (possibly smoothed) copy of the input histogram
    pub fn source(&self) -> &BinnedHistogram {
        &self.source
    }
}

/// Rasterize the fitted spline into a dense lookup histogram
///
/// Where the spline degenerates to at or below the floor (steep-slope
/// overshoot between sparse bins), the source histogram's own content at
/// that coordinate is trusted instead; the stored value is always at least
/// epsilon.
fn fill_spline_to_hist(
    label: &str,
    spline: &dyn CurveFit,
    source: &BinnedHistogram,
    dense_bins: usize,
    epsilon: f64,
) -> Result<BinnedHistogram> {
    let mut lookup = BinnedHistogram::new(label, source.xmin(), source.xmax(), dense_bins)?;
    for bin in 0..dense_bins {
        let x = lookup.bin_center(bin);
        let mut y = spline.eval(x);
        if y <= epsilon {
            y = source.content(source.find_bin(x));
        }
        lookup.set_content(bin, y.max(epsilon));
    }
    Ok(lookup)
}

/// Diagnostic check on the cloned input; warns but never fails
fn check_source(hist: &BinnedHistogram) {
    let empty_fraction = hist.empty_fraction();
    if empty_fraction > 0.5 {
        warn!(
            "more than 50% ({:.1}%) of the bins in histogram '{}' are empty (xmin={}, mean={:.4}, xmax={})",
            empty_fraction * 100.0,
            hist.name(),
            hist.xmin(),
            hist.mean(),
            hist.xmax()
        );
    }
}
