use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use algo_drills::problems::{
    bishops::count_attacking_bishops,
    consecutive::{longest_consecutive, longest_consecutive_sorted},
    n_queens::{n_queens, n_queens_sequential},
    sieve::{sieve, Primes},
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_n_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("n_queens");
    group.sample_size(10);
    for n in [8usize, 10, 12] {
        group.bench_with_input(BenchmarkId::new("default", n), &n, |b, &n| {
            b.iter(|| criterion::black_box(n_queens(n)))
        });
        group.bench_with_input(BenchmarkId::new("sequential", n), &n, |b, &n| {
            b.iter(|| criterion::black_box(n_queens_sequential(n)))
        });
    }
    group.finish();
}

fn bench_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("primes");
    for n in [10_000usize, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("sieve", n), &n, |b, &n| {
            b.iter(|| criterion::black_box(sieve(n)))
        });
    }
    for k in [1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("stream_first_k", k), &k, |b, &k| {
            b.iter(|| criterion::black_box(Primes::new().take(k).last()))
        });
    }
    group.finish();
}

fn bench_hash_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_counting");
    for len in [10_000usize, 1_000_000] {
        let mut rng = StdRng::seed_from_u64(99);
        let nums: Vec<i64> = (0..len).map(|_| rng.gen_range(0..len as i64 * 2)).collect();
        group.bench_with_input(BenchmarkId::new("consecutive_hash", len), &nums, |b, nums| {
            b.iter(|| criterion::black_box(longest_consecutive(nums)))
        });
        group.bench_with_input(BenchmarkId::new("consecutive_sort", len), &nums, |b, nums| {
            b.iter(|| criterion::black_box(longest_consecutive_sorted(nums)))
        });

        let board = 1_000i64;
        let bishops: Vec<(i64, i64)> = (0..len)
            .map(|_| (rng.gen_range(0..board), rng.gen_range(0..board)))
            .collect();
        group.bench_with_input(BenchmarkId::new("bishops", len), &bishops, |b, bishops| {
            b.iter(|| criterion::black_box(count_attacking_bishops(board as usize, bishops)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_n_queens, bench_primes, bench_hash_counting);
criterion_main!(benches);
