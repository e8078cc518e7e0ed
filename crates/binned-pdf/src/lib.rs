//! Probability density estimation from binned histograms
//!
//! This crate estimates a continuous, normalized probability density from a
//! binned histogram of observed values, for use in statistical
//! classification. The pipeline:
//!
//! 1. **Ingestion**: the input histogram is cloned and validated
//! 2. **Smoothing**: optional iterative binwise kernel smoothing
//! 3. **Spline fit**: a piecewise-polynomial curve (from `splinefit`)
//!    through the (bin center, bin content) pairs
//! 4. **Dense resampling**: the spline is rasterized into a fine lookup
//!    table, with degenerate near-zero outputs patched from the raw data
//! 5. **Normalization**: the table is rescaled so the integral over the
//!    axis range is one
//!
//! Queries afterward are pure reads: [`HistogramPdf::value_at`] linearly
//! interpolates on the lookup table and [`HistogramPdf::integral`] computes
//! interval probabilities by a midpoint Riemann sum. Both floor their result
//! at a small positive epsilon, so downstream likelihood ratios never see a
//! zero or negative density.
//!
//! # Examples
//!
//! ```rust
//! use binned_pdf::{BinnedHistogram, HistogramPdf, PdfConfig, SmoothMethod};
//!
//! // A triangular distribution binned into 20 bins over [0, 10]
//! let contents: Vec<f64> = (0..20)
//!     .map(|i| 11.0 - (i as f64 - 10.0).abs())
//!     .collect();
//! let hist = BinnedHistogram::from_contents("tri", 0.0, 10.0, contents).unwrap();
//!
//! let config = PdfConfig::new()
//!     .with_method(SmoothMethod::Spline3)
//!     .with_smoothing(1);
//! let pdf = HistogramPdf::new(&hist, &config).unwrap();
//!
//! // Total probability is one; the peak sits near the center
//! assert!((pdf.integral(0.0, 10.0) - 1.0).abs() < 1e-3);
//! assert!(pdf.value_at(5.0) > pdf.value_at(1.0));
//! ```

pub mod error;
pub mod histogram;
pub mod pdf;

mod smoothing;

pub use error::{Error, Result};
pub use histogram::BinnedHistogram;
pub use pdf::{HistogramPdf, PdfConfig, SmoothMethod, DENSE_BINS, EPSILON};
