//! Natural cubic spline interpolation
//!
//! Second derivatives at the knots are solved once at construction by the
//! standard tridiagonal recurrence with natural boundary conditions (zero
//! curvature at both ends). Evaluation then combines the bracketing knots
//! and their second derivatives in closed form.

use crate::error::{Result, SplineError};
use crate::points::ControlPoints;
use crate::traits::CurveFit;

/// Natural cubic spline through a set of control points
#[derive(Debug, Clone)]
pub struct CubicSpline {
    points: ControlPoints,
    /// Second derivative of the spline at each knot
    d2: Vec<f64>,
}

impl CubicSpline {
    /// Fit a natural cubic spline; requires at least 3 control points
    pub fn new(points: ControlPoints) -> Result<Self> {
        if points.len() < 3 {
            return Err(SplineError::InsufficientKnots {
                required: 3,
                actual: points.len(),
            });
        }
        let d2 = second_derivatives(points.xs(), points.ys());
        Ok(Self { points, d2 })
    }
}

impl CurveFit for CubicSpline {
    fn eval(&self, x: f64) -> f64 {
        let xs = self.points.xs();
        let ys = self.points.ys();
        let lo = self.points.bracket(x);
        let hi = lo + 1;

        let h = xs[hi] - xs[lo];
        let a = (xs[hi] - x) / h;
        let b = (x - xs[lo]) / h;

        a * ys[lo]
            + b * ys[hi]
            + (h * h / 6.0) * ((a * a - 1.0) * a * self.d2[lo] + (b * b - 1.0) * b * self.d2[hi])
    }

    fn label(&self) -> &str {
        "spline3"
    }
}

/// Solve the natural-spline tridiagonal system for knot second derivatives
fn second_derivatives(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let mut d2 = vec![0.0; n];
    let mut u = vec![0.0; n];

    // forward sweep; natural boundary leaves d2[0] = d2[n-1] = 0
    for i in 1..n - 1 {
        let sig = (xs[i] - xs[i - 1]) / (xs[i + 1] - xs[i - 1]);
        let p = sig * d2[i - 1] + 2.0;
        d2[i] = (sig - 1.0) / p;
        let slope_diff = (ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i])
            - (ys[i] - ys[i - 1]) / (xs[i] - xs[i - 1]);
        u[i] = (6.0 * slope_diff / (xs[i + 1] - xs[i - 1]) - sig * u[i - 1]) / p;
    }

    // back substitution
    for i in (0..n - 1).rev() {
        d2[i] = d2[i] * d2[i + 1] + u[i];
    }
    d2
}
