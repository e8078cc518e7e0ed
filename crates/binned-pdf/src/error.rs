//! Error types for PDF construction

use thiserror::Error;

/// Errors produced while validating inputs or constructing a PDF
///
/// Construction either succeeds completely or returns one of these; there is
/// no partially-constructed PDF state. Numeric edge cases at query time
/// (out-of-range coordinates, degenerate spline output, non-positive
/// normalization) are handled by clamping and substitution, never reported
/// as errors.
#[derive(Error, Debug)]
pub enum Error {
    /// Input histogram has no bins
    #[error("Cannot build a PDF from an empty histogram")]
    EmptyHistogram,

    /// Histogram axis range is degenerate or inverted
    #[error("Invalid histogram range: xmin={xmin} must be below xmax={xmax}")]
    InvalidRange { xmin: f64, xmax: f64 },

    /// Bin contents contain NaN or infinite values
    #[error("Non-finite value in {0}")]
    NonFinite(String),

    /// Invalid configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Spline fitting failed
    #[error("Spline fit error: {0}")]
    Spline(#[from] splinefit::SplineError),
}

/// Result type alias using our [`Error`] type
pub type Result<T> = std::result::Result<T, Error>;
