use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fastmul::dft::{DFT, FftTable, NttTable};
use num_complex::Complex;

fn ntt(c: &mut Criterion) {
    fn runner<const BACKWARD: bool>(table: &'static NttTable, n: usize) -> impl FnMut() {
        let mut a: Vec<u64> = (0..n as u64).map(|i| i % table.q()).collect();
        move || {
            if BACKWARD {
                table.backward_inplace(&mut a)
            } else {
                table.forward_inplace(&mut a)
            }
            black_box(&a);
        }
    }

    let table: &'static NttTable = NttTable::fermat().unwrap();

    let mut b = c.benchmark_group("ntt");
    for log_n in [8, 10, 12, 14, 16] {
        let mut forward = runner::<false>(table, 1 << log_n);
        b.bench_with_input(BenchmarkId::new("forward", 1 << log_n), &(), |b, _| b.iter(&mut forward));
        let mut backward = runner::<true>(table, 1 << log_n);
        b.bench_with_input(BenchmarkId::new("backward", 1 << log_n), &(), |b, _| b.iter(&mut backward));
    }
    b.finish();
}

fn fft(c: &mut Criterion) {
    fn runner<const BACKWARD: bool>(log_n: usize) -> impl FnMut() {
        let table: FftTable = FftTable::new(log_n);
        let mut a: Vec<Complex<f64>> = (0..1 << log_n).map(|i| Complex::new(i as f64, 0.0)).collect();
        move || {
            if BACKWARD {
                table.backward_inplace(&mut a)
            } else {
                table.forward_inplace(&mut a)
            }
            black_box(&a);
        }
    }

    let mut b = c.benchmark_group("fft");
    for log_n in [8, 10, 12, 14, 16] {
        let mut forward = runner::<false>(log_n);
        b.bench_with_input(BenchmarkId::new("forward", 1 << log_n), &(), |b, _| b.iter(&mut forward));
        let mut backward = runner::<true>(log_n);
        b.bench_with_input(BenchmarkId::new("backward", 1 << log_n), &(), |b, _| b.iter(&mut backward));
    }
    b.finish();
}

criterion_group!(benches, ntt, fft);
criterion_main!(benches);
