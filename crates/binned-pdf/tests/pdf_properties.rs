//! End-to-end properties of the PDF pipeline

use approx::assert_relative_eq;
use binned_pdf::{BinnedHistogram, Error, HistogramPdf, PdfConfig, SmoothMethod, EPSILON};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// A strictly positive bump: uniform floor plus a Gaussian peak at x=5
fn bump_histogram() -> BinnedHistogram {
    let nbins = 50;
    let contents: Vec<f64> = (0..nbins)
        .map(|i| {
            let x = (i as f64 + 0.5) * 10.0 / nbins as f64;
            1.0 + 5.0 * (-(x - 5.0) * (x - 5.0) / 2.0).exp()
        })
        .collect();
    BinnedHistogram::from_contents("bump", 0.0, 10.0, contents).unwrap()
}

/// Uniform contents except a zeroed window in the middle
fn gapped_histogram() -> BinnedHistogram {
    let mut contents = vec![1.0; 100];
    for c in &mut contents[40..=60] {
        *c = 0.0;
    }
    BinnedHistogram::from_contents("gapped", 0.0, 10.0, contents).unwrap()
}

/// A sparse histogram filled from narrow Gaussian counts; most bins empty
fn sparse_histogram() -> BinnedHistogram {
    let mut hist = BinnedHistogram::new("sparse", -10.0, 10.0, 100).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let normal = Normal::new(0.0, 0.5).unwrap();
    for _ in 0..1000 {
        let x: f64 = normal.sample(&mut rng);
        let bin = hist.find_bin(x);
        hist.set_content(bin, hist.content(bin) + 1.0);
    }
    hist
}

#[test]
fn normalization_integrates_to_one() {
    for method in [
        SmoothMethod::Spline1,
        SmoothMethod::Spline2,
        SmoothMethod::Spline3,
        SmoothMethod::Spline5,
    ] {
        let config = PdfConfig::new().with_method(method);
        let pdf = HistogramPdf::new(&bump_histogram(), &config).unwrap();
        assert_relative_eq!(pdf.integral(pdf.xmin(), pdf.xmax()), 1.0, epsilon = 1e-3);
    }
}

#[test]
fn density_is_floored_everywhere() {
    let config = PdfConfig::new().with_method(SmoothMethod::Spline3).with_smoothing(2);
    let pdf = HistogramPdf::new(&sparse_histogram(), &config).unwrap();
    for i in 0..=400 {
        let x = -10.0 + i as f64 * 0.05;
        assert!(
            pdf.value_at(x) >= EPSILON,
            "density below floor at x={x}: {}",
            pdf.value_at(x)
        );
    }
}

#[test]
fn out_of_range_queries_clamp_to_boundary() {
    let pdf = HistogramPdf::new(&bump_histogram(), &PdfConfig::default()).unwrap();
    for delta in [1e-9, 0.1, 3.0, 1e6] {
        assert_eq!(pdf.value_at(pdf.xmin() - delta), pdf.value_at(pdf.xmin()));
        assert_eq!(pdf.value_at(pdf.xmax() + delta), pdf.value_at(pdf.xmax()));
    }
}

#[test]
fn construction_is_deterministic() {
    let config = PdfConfig::new()
        .with_method(SmoothMethod::Spline2)
        .with_smoothing(3);
    let a = HistogramPdf::new(&bump_histogram(), &config).unwrap();
    let b = HistogramPdf::new(&bump_histogram(), &config).unwrap();
    assert_eq!(a.lookup_table(), b.lookup_table());
    assert_eq!(a.normalization(), b.normalization());
}

#[test]
fn no_pdf_from_degenerate_input() {
    // a zero-bin histogram is not representable, so no PDF can exist for it
    assert!(matches!(
        BinnedHistogram::new("absent", 0.0, 1.0, 0),
        Err(Error::EmptyHistogram)
    ));
    assert!(matches!(
        BinnedHistogram::from_contents("absent", 0.0, 1.0, vec![]),
        Err(Error::EmptyHistogram)
    ));
}

#[test]
fn gapped_histogram_end_to_end() {
    let config = PdfConfig::new().with_method(SmoothMethod::Spline3);
    let pdf = HistogramPdf::new(&gapped_histogram(), &config).unwrap();

    // the zeroed window is floored, not zero, and stays below the populated region
    let in_gap = pdf.value_at(5.0);
    let in_bulk = pdf.value_at(1.0);
    assert!(in_gap >= EPSILON);
    assert!(in_gap < in_bulk);

    // the floor contributes a little excess mass over the gap, so the
    // tolerance here is looser than for strictly positive inputs
    assert_relative_eq!(pdf.integral(0.0, 10.0), 1.0, epsilon = 0.05);
}

#[test]
fn unrecognized_method_code_matches_cubic() {
    let hist = bump_histogram();
    let fallback = PdfConfig::new().with_method(SmoothMethod::from_code(42));
    let explicit = PdfConfig::new().with_method(SmoothMethod::Spline3);
    let a = HistogramPdf::new(&hist, &fallback).unwrap();
    let b = HistogramPdf::new(&hist, &explicit).unwrap();
    assert_eq!(a.lookup_table().contents(), b.lookup_table().contents());
    assert_eq!(a.normalization(), b.normalization());
}

#[test]
fn smoothing_reduces_jitter() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let normal = Normal::new(0.0, 0.3).unwrap();
    let contents: Vec<f64> = (0..50)
        .map(|i| {
            let x = (i as f64 + 0.5) * 10.0 / 50.0;
            (2.0 + (-(x - 5.0) * (x - 5.0) / 4.0).exp() + normal.sample(&mut rng)).max(0.1)
        })
        .collect();
    let hist = BinnedHistogram::from_contents("noisy", 0.0, 10.0, contents).unwrap();

    let raw = HistogramPdf::new(&hist, &PdfConfig::default()).unwrap();
    let smoothed =
        HistogramPdf::new(&hist, &PdfConfig::default().with_smoothing(5)).unwrap();

    let wiggle = |pdf: &HistogramPdf| -> f64 {
        (1..100)
            .map(|i| {
                let a = pdf.value_at(i as f64 * 0.1);
                let b = pdf.value_at((i - 1) as f64 * 0.1);
                (a - b).abs()
            })
            .sum()
    };
    assert!(wiggle(&smoothed) < wiggle(&raw));
}

#[test]
fn queries_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}
    let pdf = HistogramPdf::new(&bump_histogram(), &PdfConfig::default()).unwrap();
    assert_send_sync(&pdf);

    let expected = pdf.value_at(5.0);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(pdf.value_at(5.0), expected));
        }
    });
}
