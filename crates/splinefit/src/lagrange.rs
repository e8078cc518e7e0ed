//! Local Lagrange interpolation of fixed order
//!
//! Each evaluation interpolates a polynomial through the window of control
//! points nearest to the query coordinate. Window size 2 gives piecewise
//! linear, 3 piecewise quadratic, 6 piecewise quintic. The resulting curve
//! passes through every control point and reproduces polynomials up to the
//! window degree exactly.

use crate::error::{Result, SplineError};
use crate::points::ControlPoints;
use crate::traits::CurveFit;

/// Shared evaluator for the fixed-window Lagrange fitters
#[derive(Debug, Clone)]
struct LocalLagrange {
    points: ControlPoints,
    window: usize,
}

impl LocalLagrange {
    fn new(points: ControlPoints, window: usize) -> Result<Self> {
        if points.len() < window {
            return Err(SplineError::InsufficientKnots {
                required: window,
                actual: points.len(),
            });
        }
        Ok(Self { points, window })
    }

    /// Start index of the `window` control points nearest to `x`
    ///
    /// Grows outward from the bracketing interval, taking the nearer knot on
    /// each side until the window is full.
    fn window_start(&self, x: f64) -> usize {
        let xs = self.points.xs();
        let lo = self.points.bracket(x);
        let (mut left, mut right) = (lo, lo + 1);
        while right - left + 1 < self.window {
            if left == 0 {
                right += 1;
            } else if right == xs.len() - 1 {
                left -= 1;
            } else if x - xs[left - 1] < xs[right + 1] - x {
                left -= 1;
            } else {
                right += 1;
            }
        }
        left
    }

    fn eval(&self, x: f64) -> f64 {
        let start = self.window_start(x);
        let xs = &self.points.xs()[start..start + self.window];
        let ys = &self.points.ys()[start..start + self.window];

        let mut acc = 0.0;
        for j in 0..self.window {
            let mut basis = 1.0;
            for k in 0..self.window {
                if k != j {
                    basis *= (x - xs[k]) / (xs[j] - xs[k]);
                }
            }
            acc += ys[j] * basis;
        }
        acc
    }
}

/// Piecewise-linear interpolation between adjacent control points
#[derive(Debug, Clone)]
pub struct LinearSpline {
    inner: LocalLagrange,
}

impl LinearSpline {
    /// Fit a piecewise-linear curve; requires at least 2 control points
    pub fn new(points: ControlPoints) -> Result<Self> {
        Ok(Self {
            inner: LocalLagrange::new(points, 2)?,
        })
    }
}

impl CurveFit for LinearSpline {
    fn eval(&self, x: f64) -> f64 {
        self.inner.eval(x)
    }

    fn label(&self) -> &str {
        "spline1"
    }
}

/// Piecewise-quadratic interpolation through the 3 nearest control points
#[derive(Debug, Clone)]
pub struct QuadraticSpline {
    inner: LocalLagrange,
}

impl QuadraticSpline {
    /// Fit a piecewise-quadratic curve; requires at least 3 control points
    pub fn new(points: ControlPoints) -> Result<Self> {
        Ok(Self {
            inner: LocalLagrange::new(points, 3)?,
        })
    }
}

impl CurveFit for QuadraticSpline {
    fn eval(&self, x: f64) -> f64 {
        self.inner.eval(x)
    }

    fn label(&self) -> &str {
        "spline2"
    }
}

/// Piecewise-quintic interpolation through the 6 nearest control points
#[derive(Debug, Clone)]
pub struct QuinticSpline {
    inner: LocalLagrange,
}

impl QuinticSpline {
    /// Fit a piecewise-quintic curve; requires at least 6 control points
    pub fn new(points: ControlPoints) -> Result<Self> {
        Ok(Self {
            inner: LocalLagrange::new(points, 6)?,
        })
    }
}

impl CurveFit for QuinticSpline {
    fn eval(&self, x: f64) -> f64 {
        self.inner.eval(x)
    }

    fn label(&self) -> &str {
        "spline5"
    }
}
