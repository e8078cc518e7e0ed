//! Error types for spline construction

use thiserror::Error;

/// Errors produced while validating control points or constructing a fit
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Not enough control points for the requested interpolation order
    #[error("Insufficient knots: interpolation requires at least {required} control points, got {actual}")]
    InsufficientKnots { required: usize, actual: usize },

    /// Control point abscissas must be strictly increasing
    #[error("Knots not strictly increasing at index {index}")]
    NonIncreasingKnots { index: usize },

    /// x and y sequences have different lengths
    #[error("Length mismatch: {xs} x values but {ys} y values")]
    LengthMismatch { xs: usize, ys: usize },

    /// A control point coordinate is NaN or infinite
    #[error("Control points contain NaN or infinite values")]
    NonFinite,
}

/// Result type alias using [`SplineError`]
pub type Result<T> = std::result::Result<T, SplineError>;
