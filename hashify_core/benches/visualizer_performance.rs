//! Performance benchmarks for fingerprint visualization

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hashify_core::{HashAlgorithm, hash_text, visualize};
use std::hint::black_box;

fn benchmark_visualize(c: &mut Criterion) {
    let mut group = c.benchmark_group("visualize");

    for algorithm in HashAlgorithm::ALL {
        let digest = hash_text("benchmark input", algorithm).unwrap();
        group.bench_with_input(
            BenchmarkId::new("grid", algorithm.id()),
            &digest,
            |b, digest| b.iter(|| black_box(visualize(black_box(digest)))),
        );
    }

    group.bench_function("css_render_sha512", |b| {
        let digest = hash_text("benchmark input", HashAlgorithm::SHA512).unwrap();
        let grid = visualize(&digest).unwrap();
        b.iter(|| {
            let css: Vec<String> = grid.pixels().iter().map(|p| p.to_css()).collect();
            black_box(css)
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_visualize);
criterion_main!(benches);
