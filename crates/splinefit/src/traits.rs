//! Core trait for fitted curves

/// A continuous function fitted through control points
///
/// Implementors are immutable after construction, so evaluation is safe to
/// call concurrently from multiple threads.
pub trait CurveFit {
    /// Evaluate the fitted curve at `x`
    ///
    /// Inside the knot range this interpolates; outside, the boundary
    /// polynomial segment is extended.
    fn eval(&self, x: f64) -> f64;

    /// A short label identifying the interpolation variant
    fn label(&self) -> &str;
}
