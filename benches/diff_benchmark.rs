//! Benchmarks for the diff engine.
//!
//! Run with: cargo bench --bench diff_benchmark
//!
//! Compares positional array comparison against content matching with
//! greedy and optimal assignment on shuffled record lists.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jsondiff_tools::{ArrayMatchConfig, AssignmentMethod, DiffEngine};
use serde_json::{json, Value};
use std::hint::black_box;

/// Generate an API-style response holding `count` user records.
fn generate_records(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("user-{i}"),
                "email": format!("user-{i}@example.com"),
                "active": i % 3 != 0,
                "tags": [format!("team-{}", i % 7), "staff"],
            })
        })
        .collect()
}

/// Generate a left/right pair: the right side is rotated, every tenth
/// record is edited and the last `count / 20` records are replaced.
fn generate_pair(count: usize) -> (Value, Value) {
    let left = generate_records(count);
    let mut right = left.clone();

    for (i, record) in right.iter_mut().enumerate() {
        if i % 10 == 0 {
            record["email"] = json!(format!("user-{i}@changed.example.com"));
        }
    }
    let replaced = count / 20;
    for (offset, record) in right.iter_mut().rev().take(replaced).enumerate() {
        *record = json!({
            "id": count + offset,
            "name": format!("new-{offset}"),
            "email": format!("new-{offset}@example.com"),
        });
    }
    right.rotate_left(count / 3);

    (
        json!({"status": "ok", "data": {"users": left}}),
        json!({"status": "ok", "data": {"users": right}}),
    )
}

fn benchmark_array_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_matching");
    group.sample_size(20);

    for size in [100, 500] {
        let (left, right) = generate_pair(size);

        let positional = DiffEngine::new().order_sensitive(true);
        group.bench_with_input(BenchmarkId::new("order_sensitive", size), &size, |b, _| {
            b.iter(|| positional.compare_unbounded(black_box(&left), black_box(&right)));
        });

        let greedy = DiffEngine::new();
        group.bench_with_input(BenchmarkId::new("greedy", size), &size, |b, _| {
            b.iter(|| greedy.compare_unbounded(black_box(&left), black_box(&right)));
        });

        let optimal = DiffEngine::new().with_matching_config(
            ArrayMatchConfig::balanced().with_assignment(AssignmentMethod::Optimal),
        );
        group.bench_with_input(BenchmarkId::new("optimal", size), &size, |b, _| {
            b.iter(|| optimal.compare_unbounded(black_box(&left), black_box(&right)));
        });
    }

    group.finish();
}

fn benchmark_identical_documents(c: &mut Criterion) {
    let (left, _) = generate_pair(1000);
    let copy = left.clone();
    let engine = DiffEngine::new();

    c.bench_function("identical_1000_records", |b| {
        b.iter(|| engine.compare_unbounded(black_box(&left), black_box(&copy)));
    });
}

criterion_group!(benches, benchmark_array_matching, benchmark_identical_documents);
criterion_main!(benches);
