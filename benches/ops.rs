//! Elementary-function benchmarks: std baseline vs scalar kernels vs SIMD
//! vs parallel SIMD, across cache-ladder vector sizes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanemath::slice::{SliceBinMath, SliceMath};
use lanemath::{Domain, Op};

const VECTOR_SIZES: &[usize] = &[4_096, 65_536, 1_048_576, 16_777_216];

fn data_f32(len: usize, domain: Domain) -> Vec<f32> {
    let (lo, hi) = domain.sample_range();
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(lo..hi) as f32).collect()
}

fn data_f64(len: usize, domain: Domain) -> Vec<f64> {
    let (lo, hi) = domain.sample_range();
    let mut rng = StdRng::seed_from_u64(43);
    (0..len).map(|_| rng.random_range(lo..hi)).collect()
}

macro_rules! bench_unary {
    ($fn_name:ident, $op:expr, $elem:ty, $data:ident, $std:expr, $simd:ident, $par:ident) => {
        fn $fn_name(c: &mut Criterion) {
            for &size in VECTOR_SIZES {
                let mut group =
                    c.benchmark_group(format!("{} {}/{}", $op.name(), stringify!($elem), size));
                group.throughput(Throughput::Bytes(
                    (size * std::mem::size_of::<$elem>()) as u64,
                ));

                let input = $data(size, $op.domain());
                let input = input.as_slice();

                group.bench_with_input(BenchmarkId::new("std", size), input, |b, xs| {
                    b.iter(|| {
                        black_box(xs.iter().map($std).collect::<Vec<$elem>>())
                    })
                });

                group.bench_with_input(BenchmarkId::new("SIMD", size), input, |b, xs| {
                    b.iter(|| black_box(xs.$simd()))
                });

                group.bench_with_input(BenchmarkId::new("Parallel SIMD", size), input, |b, xs| {
                    b.iter(|| black_box(black_box(xs).$par()))
                });

                group.finish();
            }
        }
    };
}

bench_unary!(bench_sin_f32, Op::Sin, f32, data_f32, |x| x.sin(), simd_sin, par_simd_sin);
bench_unary!(bench_sin_f64, Op::Sin, f64, data_f64, |x| x.sin(), simd_sin, par_simd_sin);
bench_unary!(bench_exp_f32, Op::Exp, f32, data_f32, |x| x.exp(), simd_exp, par_simd_exp);
bench_unary!(bench_exp_f64, Op::Exp, f64, data_f64, |x| x.exp(), simd_exp, par_simd_exp);
bench_unary!(bench_log_f64, Op::Log, f64, data_f64, |x| x.ln(), simd_log, par_simd_log);
bench_unary!(bench_cbrt_f64, Op::Cbrt, f64, data_f64, |x| x.cbrt(), simd_cbrt, par_simd_cbrt);
bench_unary!(bench_atan_f32, Op::Atan, f32, data_f32, |x| x.atan(), simd_atan, par_simd_atan);
bench_unary!(bench_erf_f64, Op::Erf, f64, data_f64, |x| statrs::function::erf::erf(*x), simd_erf, par_simd_erf);
bench_unary!(bench_tanh_f64, Op::Tanh, f64, data_f64, |x| x.tanh(), simd_tanh, par_simd_tanh);

fn bench_atan2_f64(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("atan2 f64/{size}"));
        group.throughput(Throughput::Bytes((2 * size * std::mem::size_of::<f64>()) as u64));

        let ys = data_f64(size, Domain::Real);
        let mut rng = StdRng::seed_from_u64(44);
        let xs: Vec<f64> = (0..size).map(|_| rng.random_range(-50.0..50.0)).collect();
        let (ys, xs) = (ys.as_slice(), xs.as_slice());

        group.bench_function(BenchmarkId::new("std", size), |b| {
            b.iter(|| {
                black_box(
                    ys.iter()
                        .zip(xs)
                        .map(|(&y, &x)| y.atan2(x))
                        .collect::<Vec<f64>>(),
                )
            })
        });

        group.bench_function(BenchmarkId::new("SIMD", size), |b| {
            b.iter(|| black_box(ys.simd_atan2(xs)))
        });

        group.bench_function(BenchmarkId::new("Parallel SIMD", size), |b| {
            b.iter(|| black_box(ys.par_simd_atan2(xs)))
        });

        group.finish();
    }
}

criterion_group!(
    benches,
    bench_sin_f32,
    bench_sin_f64,
    bench_exp_f32,
    bench_exp_f64,
    bench_log_f64,
    bench_cbrt_f64,
    bench_atan_f32,
    bench_erf_f64,
    bench_tanh_f64,
    bench_atan2_f64,
);
criterion_main!(benches);
