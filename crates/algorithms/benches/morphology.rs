//! Benchmarks for labelmap kernels

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use labelmorph_algorithms::logic::{boolean_combine, LogicOp};
use labelmorph_algorithms::morphology::{dilate, erode, StructuringElement};
use labelmorph_algorithms::statistics::observed_maximum;
use labelmorph_core::{VoxelGeometry, VoxelGrid};

fn create_test_volume(size: usize, phase: usize) -> VoxelGrid<u8> {
    let geometry = VoxelGeometry::new([0.0; 3], [0.9, 0.9, 2.5], [size, size, size / 2])
        .expect("valid geometry");
    let mut grid = VoxelGrid::new(geometry);
    // Scattered blobs so every kernel sees both foreground and background
    for ((k, j, i), v) in grid.data_mut().indexed_iter_mut() {
        if (i / 8 + j / 8 + k / 4 + phase) % 3 == 0 {
            *v = 1;
        }
    }
    grid
}

fn bench_dilate(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/dilate");
    for size in [32, 64, 128] {
        let volume = create_test_volume(size, 0);
        for (label, se) in [
            ("box", StructuringElement::Box([2, 2, 1])),
            ("ellipsoid", StructuringElement::Ellipsoid([2, 2, 1])),
        ] {
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| dilate(black_box(&volume), &se).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_erode(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/erode");
    let se = StructuringElement::Box([2, 2, 1]);
    for size in [32, 64, 128] {
        let volume = create_test_volume(size, 0);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| erode(black_box(&volume), &se).unwrap())
        });
    }
    group.finish();
}

fn bench_logic(c: &mut Criterion) {
    let mut group = c.benchmark_group("logic/and");
    for size in [64, 128, 256] {
        let a = create_test_volume(size, 0);
        let b_vol = create_test_volume(size, 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| boolean_combine(black_box(&a), Some(&b_vol), LogicOp::And, 1).unwrap())
        });
    }
    group.finish();
}

fn bench_observed_maximum(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics/observed_maximum");
    for size in [64, 128, 256] {
        let volume = create_test_volume(size, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| observed_maximum(black_box(&volume)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_dilate,
    bench_erode,
    bench_logic,
    bench_observed_maximum
);
criterion_main!(benches);
