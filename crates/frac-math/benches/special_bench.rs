use criterion::{criterion_group, criterion_main, Criterion};
use frac_math::fox_h::{FoxHEvaluator, HFunctionSpec, HParameter, OscillatoryFallback};
use frac_math::mittag_leffler::mittag_leffler;
use frac_types::state::Grid1D;
use ndarray::Array1;
use num_complex::Complex64;
use std::hint::black_box;

fn bench_mittag_leffler_curve(c: &mut Criterion) {
    let grid = Grid1D::new(100, 0.0, 8.0);
    let z: Array1<Complex64> = grid
        .points
        .mapv(|t| Complex64::new(-t.powf(3.0), 0.0));

    c.bench_function("mittag_leffler_100pts_80terms", |b| {
        b.iter(|| {
            let out = mittag_leffler(3.0, 1.0, &z, 80).unwrap();
            black_box(out[50]);
        })
    });
}

fn bench_fox_h_fallback(c: &mut Criterion) {
    let fallback = OscillatoryFallback::default();

    c.bench_function("fox_h_fallback_single", |b| {
        b.iter(|| {
            black_box(fallback.integral(0.7, 1.5));
        })
    });
}

fn bench_fox_h_contour(c: &mut Criterion) {
    // H^{1,0}_{0,1} has a convergent contour, so this times the
    // primary Mellin-Barnes path end to end.
    let spec = HFunctionSpec::new(1, 0, vec![], vec![HParameter::real(0.0, 1.0)]).unwrap();
    let ev = FoxHEvaluator::default();

    c.bench_function("fox_h_contour_single", |b| {
        b.iter(|| {
            black_box(ev.evaluate(&spec, Complex64::new(2.0, 0.0), 1.0, 1.0));
        })
    });
}

criterion_group!(
    benches,
    bench_mittag_leffler_curve,
    bench_fox_h_fallback,
    bench_fox_h_contour
);
criterion_main!(benches);
