//! Control point sequences for spline fitting

use crate::error::{Result, SplineError};

/// An ordered sequence of `(x, y)` control points
///
/// This is the bridge between binned data and the spline fitters: a consumer
/// extracts `(bin center, bin content)` pairs into a `ControlPoints` and
/// hands it to a fitter. Validation happens once here, so the fitters can
/// assume strictly increasing, finite abscissas.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoints {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl ControlPoints {
    /// Create a control point sequence from separate x and y vectors
    ///
    /// Fails if the lengths differ, fewer than two points are given, any
    /// coordinate is non-finite, or the x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(SplineError::LengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        if xs.len() < 2 {
            return Err(SplineError::InsufficientKnots {
                required: 2,
                actual: xs.len(),
            });
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(SplineError::NonFinite);
        }
        for i in 1..xs.len() {
            if xs[i] <= xs[i - 1] {
                return Err(SplineError::NonIncreasingKnots { index: i });
            }
        }
        Ok(Self { xs, ys })
    }

    /// Create a control point sequence from `(x, y)` pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let (xs, ys) = pairs.into_iter().unzip();
        Self::new(xs, ys)
    }

    /// Number of control points
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the sequence is empty (cannot happen for a validated instance)
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The abscissas, strictly increasing
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// The ordinates
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Index of the knot interval bracketing `x`
    ///
    /// Returns `lo` such that `xs[lo] <= x <= xs[lo + 1]` for interior
    /// queries; queries outside the knot range get the nearest boundary
    /// interval.
    pub(crate) fn bracket(&self, x: f64) -> usize {
        match self.xs.partition_point(|&k| k < x) {
            0 => 0,
            i if i >= self.xs.len() => self.xs.len() - 2,
            i => i - 1,
        }
    }
}
