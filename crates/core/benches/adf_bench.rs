//! Criterion benchmarks for the ADF engines.
//!
//! Uses synthetic cubic-lattice configurations to compare the direct
//! O(N^2) neighbor search against the cell-list variant across system
//! sizes.
//!
//! Run with: cargo bench -p adf-core

use adf_core::adf::compute_adf;
use adf_core::cell_list::compute_adf_cell_list;
use adf_core::pbc::BoxSize;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build an `n x n x n` cubic lattice with unit spacing, slightly
/// perturbed so neighbor shells are not perfectly degenerate.
fn build_lattice(n: usize) -> (Vec<[f64; 3]>, BoxSize) {
    let mut positions = Vec::with_capacity(n * n * n);
    for ix in 0..n {
        for iy in 0..n {
            for iz in 0..n {
                // Deterministic sub-lattice jitter
                let jitter = 0.05 * ((ix + 2 * iy + 3 * iz) % 7) as f64 / 7.0;
                positions.push([
                    ix as f64 + jitter,
                    iy as f64 + jitter * 0.5,
                    iz as f64 - jitter,
                ]);
            }
        }
    }
    let edge = n as f64;
    let box_size = BoxSize::new([edge, edge, edge]).expect("positive lattice edge");
    (positions, box_size)
}

fn bench_adf_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("adf");

    for &n in &[3usize, 4, 6] {
        let (positions, box_size) = build_lattice(n);
        let n_particles = positions.len();
        group.bench_with_input(
            BenchmarkId::new("direct", n_particles),
            &n_particles,
            |b, _| {
                b.iter(|| {
                    compute_adf(black_box(&positions), &box_size, 1.5, 180)
                        .expect("valid parameters")
                })
            },
        );
        group.bench_with_input(
            BenchmarkId::new("cell_list", n_particles),
            &n_particles,
            |b, _| {
                b.iter(|| {
                    compute_adf_cell_list(black_box(&positions), &box_size, 1.5, 180)
                        .expect("valid parameters")
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_adf_engines);
criterion_main!(benches);
