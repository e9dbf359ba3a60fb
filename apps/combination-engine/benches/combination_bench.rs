//! Criterion benchmark for the combination search.
//!
//! Exercises a representative reconciliation-sized instance: a few dozen
//! irregular amounts against a target with no exact hit, which keeps the
//! branch-and-bound pruning honest.

use std::hint::black_box;

use combination_engine::{CombinationSolver, SolverConfig};
use criterion::{Criterion, criterion_group, criterion_main};

fn representative_rows() -> Vec<(String, String)> {
    (0..18u32)
        .map(|i| {
            let cents = 2_000 + (i * 1_733) % 40_000;
            (
                format!("row-{i}"),
                format!("{}.{:02}", cents / 100, cents % 100),
            )
        })
        .collect()
}

fn bench_find_combination(c: &mut Criterion) {
    let solver = CombinationSolver::new(representative_rows(), "1800.01", SolverConfig::default())
        .expect("valid target");

    c.bench_function("find_combination_18_items", |b| {
        b.iter(|| black_box(solver.find_combination()));
    });
}

criterion_group!(benches, bench_find_combination);
criterion_main!(benches);
