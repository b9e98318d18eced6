//! Benchmarks for univariate and bilinear interpolation.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use polydfa::gf::{Gf, GfVector};
use polydfa::interp::{reduce, BilinearPoly, Partition, VandermondeSolver};

fn bench_univariate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Univariate Interpolation");

    for order in [8u32, 16, 32, 64] {
        let gf = Gf::new(order).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let y = GfVector::random(&gf, (order - 1) as usize, &mut rng);
        let solver = VandermondeSolver::new(gf);

        group.bench_with_input(BenchmarkId::new("order", order), &y, |b, y| {
            b.iter(|| solver.interpolate(y).unwrap());
        });
    }

    group.finish();
}

fn bench_univariate_partitioned(c: &mut Criterion) {
    let mut group = c.benchmark_group("Partitioned Interpolation");

    let gf = Gf::new(64).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    let y = GfVector::random(&gf, 63, &mut rng);
    let solver = VandermondeSolver::new(gf);

    for count in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("workers", count), &count, |b, &count| {
            b.iter(|| {
                let partials: Vec<_> = (0..count)
                    .map(|index| {
                        solver
                            .interpolate_partition(&y, Partition::new(index, count).unwrap())
                            .unwrap()
                    })
                    .collect();
                reduce(&partials).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_bilinear(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bilinear Interpolation");

    for side in [2usize, 3, 4] {
        let gf = Gf::new(17).unwrap();
        let mut x_vals = Vec::new();
        let mut y_vals = Vec::new();
        for i in 0..side {
            for j in 0..side {
                x_vals.push(i as u32);
                y_vals.push(j as u32);
            }
        }
        let x = GfVector::from_values(&gf, x_vals).unwrap();
        let y = GfVector::from_values(&gf, y_vals).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let z = GfVector::random(&gf, side * side, &mut rng);

        group.bench_with_input(
            BenchmarkId::new("grid", format!("{side}x{side}")),
            &side,
            |b, _| {
                b.iter(|| BilinearPoly::fit(&gf, &x, &y, &z).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_univariate,
    bench_univariate_partitioned,
    bench_bilinear
);
criterion_main!(benches);
