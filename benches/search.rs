//! Benchmarks for minimax with and without alpha-beta pruning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_ttt::core::{Board, Mark};
use rust_ttt::search::{best_move, search_parallel, SearchConfig};

fn positions() -> Vec<(&'static str, Board, Mark)> {
    let reference: Board = "XO_/_X_/___".parse().expect("valid board");
    vec![("empty", Board::empty(), Mark::X), ("xo_x", reference, Mark::O)]
}

fn bench_full_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_search");
    group.sample_size(10);

    for (name, board, perspective) in positions() {
        group.bench_with_input(BenchmarkId::new("unpruned", name), &board, |b, board| {
            b.iter(|| black_box(best_move(board, perspective, None, false)));
        });
        group.bench_with_input(BenchmarkId::new("pruned", name), &board, |b, board| {
            b.iter(|| black_box(best_move(board, perspective, None, true)));
        });
    }

    group.finish();
}

fn bench_parallel_root(c: &mut Criterion) {
    let config = SearchConfig::default();
    c.bench_function("parallel_pruned_empty", |b| {
        b.iter(|| black_box(search_parallel(&Board::empty(), Mark::X, &config)));
    });
}

fn bench_depth_limited(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_limited_empty");
    for depth in [2u32, 4, 6] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(best_move(&Board::empty(), Mark::X, Some(depth), true)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_search, bench_parallel_root, bench_depth_limited);
criterion_main!(benches);
