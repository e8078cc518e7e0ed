//! Piecewise-polynomial interpolation through control points
//!
//! This crate provides the curve-fitting capability used by `binned-pdf`:
//! given a sequence of `(x, y)` control points with strictly increasing `x`,
//! it builds a continuous function that passes through all of them. Four
//! interpolation orders are available:
//!
//! - [`LinearSpline`]: piecewise-linear between adjacent points
//! - [`QuadraticSpline`]: local quadratic through the 3 nearest points
//! - [`CubicSpline`]: natural cubic spline (continuous second derivative)
//! - [`QuinticSpline`]: local quintic through the 6 nearest points
//!
//! All fitters implement the [`CurveFit`] trait, so consumers can dispatch
//! on interpolation order without knowing the concrete type.
//!
//! # Examples
//!
//! ```rust
//! use splinefit::{ControlPoints, CubicSpline, CurveFit};
//!
//! let points = ControlPoints::new(
//!     vec![0.0, 1.0, 2.0, 3.0],
//!     vec![0.0, 1.0, 4.0, 9.0],
//! ).unwrap();
//! let spline = CubicSpline::new(points).unwrap();
//!
//! // Interpolation passes through the control points
//! assert!((spline.eval(2.0) - 4.0).abs() < 1e-12);
//! ```

pub mod cubic;
pub mod error;
pub mod lagrange;
pub mod points;
pub mod traits;

pub use cubic::CubicSpline;
pub use error::{Result, SplineError};
pub use lagrange::{LinearSpline, QuadraticSpline, QuinticSpline};
pub use points::ControlPoints;
pub use traits::CurveFit;
