// Criterion benchmarks for forge-threshold.
//
// Groups:
//   filter_u32_gt          sequential value scan at 1M/4M/16M, ~50% selectivity
//   filter_u32_selectivity 16M sequential scan at 1%..99% selectivity
//   filter_u32_indices     16M index-only vs value output
//   filter_u32_parallel    16M sequential vs partitioned rayon scan

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forge_threshold::{filter, filter_gt, par_filter, ComparisonKind, OutputMode, ScanConfig};
use rand::Rng;

fn gen_u32(n: usize) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..n).map(|_| rng.gen_range(0..1_000_000u32)).collect()
}

// ── filter_u32_gt: 1M, 4M, 16M at 50% selectivity ──────────────────────────

fn filter_u32_gt(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_u32_gt");

    for &n in &[1_000_000usize, 4_000_000, 16_000_000] {
        let data = gen_u32(n);
        let label = format!("{}M", n / 1_000_000);
        group.bench_with_input(BenchmarkId::new("sequential", &label), &n, |b, _| {
            b.iter(|| black_box(filter_gt(&data, &500_000).unwrap()));
        });
    }
    group.finish();
}

// ── filter_u32_selectivity: 16M at 1%, 10%, 50%, 90%, 99% ──────────────────

fn filter_u32_selectivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_u32_selectivity");
    let data = gen_u32(16_000_000);

    // Data is uniform 0..1M.
    let cases: &[(&str, u32)] = &[
        ("1pct", 990_000),
        ("10pct", 900_000),
        ("50pct", 500_000),
        ("90pct", 100_000),
        ("99pct", 10_000),
    ];

    for &(label, threshold) in cases {
        group.bench_with_input(BenchmarkId::new("Gt", label), &threshold, |b, t| {
            b.iter(|| black_box(filter_gt(&data, t).unwrap()));
        });
    }
    group.finish();
}

// ── filter_u32_indices: index output vs value output ───────────────────────

fn filter_u32_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_u32_indices");
    let data = gen_u32(16_000_000);

    for mode in [OutputMode::Values, OutputMode::Indices] {
        group.bench_function(mode.name(), |b| {
            b.iter(|| black_box(filter(&data, &500_000, ComparisonKind::Lt, mode).unwrap()));
        });
    }
    group.finish();
}

// ── filter_u32_parallel: sequential vs partitioned ─────────────────────────

fn filter_u32_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_u32_parallel");
    let data = gen_u32(16_000_000);
    let seq = ScanConfig::sequential();
    let par = ScanConfig::default();

    for (label, config) in [("sequential", &seq), ("rayon", &par)] {
        group.bench_function(label, |b| {
            b.iter(|| {
                black_box(
                    par_filter(&data, &500_000, ComparisonKind::Gt, OutputMode::Values, config)
                        .unwrap(),
                )
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    filter_u32_gt,
    filter_u32_selectivity,
    filter_u32_indices,
    filter_u32_parallel,
);
criterion_main!(benches);
