//! Binwise kernel smoothing
//!
//! A single pass replaces each bin with the 1-2-1 binomial average of its
//! neighborhood; the boundary bins use the renormalized two-tap version of
//! the same kernel. Repeated passes approach a Gaussian blur of the bin
//! contents, pulling each bin toward its local average before spline
//! fitting.

/// Apply `iterations` passes of 1-2-1 kernel smoothing in place
///
/// Slices shorter than 3 bins are left untouched. Constant data is a fixed
/// point of the kernel.
pub(crate) fn smooth_contents(values: &mut [f64], iterations: usize) {
    let n = values.len();
    if n < 3 {
        return;
    }
    let mut buf = vec![0.0; n];
    for _ in 0..iterations {
        buf[0] = (2.0 * values[0] + values[1]) / 3.0;
        for i in 1..n - 1 {
            buf[i] = (values[i - 1] + 2.0 * values[i] + values[i + 1]) / 4.0;
        }
        buf[n - 1] = (values[n - 2] + 2.0 * values[n - 1]) / 3.0;
        values.copy_from_slice(&buf);
    }
}
