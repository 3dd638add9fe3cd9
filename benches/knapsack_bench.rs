use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_knapsack::catalog::{random_catalog, CatalogSpec};
use u_knapsack::{BruteForce, GreedySelector, MemoSolver, TableSolver};

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[10usize, 100, 1000] {
        let catalog = random_catalog(&CatalogSpec::default().with_items(n), 42);
        let capacity = n as i64 * 3;
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(catalog, capacity),
            |b, (cat, cap)| {
                b.iter(|| {
                    let result = GreedySelector::select(black_box(cat), black_box(*cap));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force");
    group.sample_size(10);

    for &n in &[8usize, 12, 16] {
        let catalog = random_catalog(&CatalogSpec::default().with_items(n), 42);
        let capacity = n as i64 * 3;
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(catalog, capacity),
            |b, (cat, cap)| {
                b.iter(|| {
                    let result = BruteForce::solve(black_box(cat), black_box(*cap));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_memoized(c: &mut Criterion) {
    let mut group = c.benchmark_group("memoized");
    group.sample_size(10);

    for &(n, capacity) in &[(20usize, 60i64), (100, 300), (200, 1000)] {
        let catalog = random_catalog(&CatalogSpec::default().with_items(n), 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_c{}", n, capacity), n),
            &(catalog, capacity),
            |b, (cat, cap)| {
                b.iter(|| {
                    let result = MemoSolver::solve(black_box(cat), black_box(*cap));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_tabulating(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabulating");
    group.sample_size(10);

    for &(n, capacity) in &[(20usize, 60i64), (100, 300), (200, 1000), (1000, 5000)] {
        let catalog = random_catalog(&CatalogSpec::default().with_items(n), 42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_c{}", n, capacity), n),
            &(catalog, capacity),
            |b, (cat, cap)| {
                b.iter(|| {
                    let result = TableSolver::solve(black_box(cat), black_box(*cap));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_brute_force, bench_memoized, bench_tabulating);
criterion_main!(benches);
