//! Benchmarks for corpus loading and poem generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poet_core::{corpus, EdgesGraph, GraphPoet, VerticesGraph};

const CORPUS: &str = r#"It was the best of times, it was the worst of times,
it was the age of wisdom, it was the age of foolishness,
it was the epoch of belief, it was the epoch of incredulity,
it was the season of Light, it was the season of Darkness,
it was the spring of hope, it was the winter of despair,
we had everything before us, we had nothing before us,
we were all going direct to Heaven, we were all going direct the other way"#;

const INPUT: &str = "It the best times, was age wisdom, we everything us, all direct the way";

/// Repeat the corpus so the graph has enough edges to matter.
fn corpus_lines(copies: usize) -> Vec<&'static str> {
    let lines: Vec<&str> = CORPUS.lines().collect();
    lines.iter().copied().cycle().take(lines.len() * copies).collect()
}

fn bench_build_graph(c: &mut Criterion) {
    let lines = corpus_lines(50);

    c.bench_function("build_graph_edges", |b| {
        b.iter(|| {
            let graph: EdgesGraph<String> = corpus::build_graph(black_box(&lines)).unwrap();
            black_box(graph)
        })
    });

    c.bench_function("build_graph_vertices", |b| {
        b.iter(|| {
            let graph: VerticesGraph<String> = corpus::build_graph(black_box(&lines)).unwrap();
            black_box(graph)
        })
    });
}

fn bench_poem(c: &mut Criterion) {
    let lines = corpus_lines(50);
    let by_edges: GraphPoet<EdgesGraph<String>> = GraphPoet::from_corpus_lines(&lines).unwrap();
    let by_vertices: GraphPoet<VerticesGraph<String>> =
        GraphPoet::from_corpus_lines(&lines).unwrap();

    c.bench_function("poem_edges", |b| {
        b.iter(|| black_box(by_edges.poem(black_box(INPUT))))
    });

    c.bench_function("poem_vertices", |b| {
        b.iter(|| black_box(by_vertices.poem(black_box(INPUT))))
    });
}

criterion_group!(benches, bench_build_graph, bench_poem);
criterion_main!(benches);
