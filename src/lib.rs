//! Spline-smoothed probability density estimation from binned histograms
//!
//! Umbrella crate re-exporting the workspace members:
//!
//! - [`binned_pdf`]: the PDF pipeline of histogram ingestion, smoothing,
//!   spline dispatch, dense resampling, normalization, and queries
//! - [`splinefit`]: piecewise-polynomial interpolation through control
//!   points
//!
//! # Examples
//!
//! ```rust
//! use spline_density::{BinnedHistogram, HistogramPdf, PdfConfig, SmoothMethod};
//!
//! let hist = BinnedHistogram::from_contents(
//!     "signal",
//!     0.0,
//!     1.0,
//!     vec![4.0, 7.0, 12.0, 9.0, 5.0, 3.0, 2.0, 2.0],
//! ).unwrap();
//!
//! let config = PdfConfig::new().with_method(SmoothMethod::Spline2);
//! let pdf = HistogramPdf::new(&hist, &config).unwrap();
//! assert!((pdf.integral(0.0, 1.0) - 1.0).abs() < 1e-3);
//! ```

pub use binned_pdf;
pub use splinefit;

pub use binned_pdf::{
    BinnedHistogram, Error, HistogramPdf, PdfConfig, Result, SmoothMethod, DENSE_BINS, EPSILON,
};
pub use splinefit::{
    ControlPoints, CubicSpline, CurveFit, LinearSpline, QuadraticSpline, QuinticSpline,
    SplineError,
};
