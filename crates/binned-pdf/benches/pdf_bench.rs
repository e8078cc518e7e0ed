use binned_pdf::{BinnedHistogram, HistogramPdf, PdfConfig, SmoothMethod};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bump_histogram(nbins: usize) -> BinnedHistogram {
    let contents: Vec<f64> = (0..nbins)
        .map(|i| {
            let x = (i as f64 + 0.5) * 10.0 / nbins as f64;
            1.0 + 5.0 * (-(x - 5.0) * (x - 5.0) / 2.0).exp()
        })
        .collect();
    BinnedHistogram::from_contents("bump", 0.0, 10.0, contents).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    let hist = bump_histogram(100);
    let mut group = c.benchmark_group("construction");
    for method in [
        SmoothMethod::Spline1,
        SmoothMethod::Spline2,
        SmoothMethod::Spline3,
        SmoothMethod::Spline5,
    ] {
        let config = PdfConfig::new().with_method(method);
        group.bench_function(format!("{method:?}"), |b| {
            b.iter(|| HistogramPdf::new(black_box(&hist), &config).unwrap())
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let pdf = HistogramPdf::new(&bump_histogram(100), &PdfConfig::default()).unwrap();
    c.bench_function("value_at", |b| {
        b.iter(|| black_box(&pdf).value_at(black_box(4.2)))
    });
    c.bench_function("integral_full_range", |b| {
        b.iter(|| black_box(&pdf).integral(0.0, 10.0))
    });
}

criterion_group!(benches, bench_construction, bench_queries);
criterion_main!(benches);
