use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use syntax_scoring::scoring::{ScoreTable, Scores};
use syntax_scoring::validation::validate_document;

const REFERENCE: [&str; 10] = [
    "[({(<(())[]>[[{[]{<()<>>",
    "[(()[<>])]({[<{<<[]>>(",
    "{([(<{}[<>[]}>{[]{[(<()>",
    "(((({<>}<{<{<>}{[]{[]{}",
    "[[<[([]))<([[{}[[()]]]",
    "[{[{({}]{}}([{[{{{}}([]",
    "{<[[]]>}<{[{[{[]{()[[[]",
    "[<(<(<(<{}))><([]([]()",
    "<{([([[(<>()){}]>(<<{{",
    "<{([{{}}[<[[[<>{}]]]>[]]",
];

/// Generate input lines for a scenario
fn generate_content(lines: usize, scenario: &str) -> Vec<String> {
    match scenario {
        "all_valid" => (0..lines)
            .map(|i| "([{<>}])".repeat(1 + i % 12))
            .collect(),
        "deep_incomplete" => (0..lines)
            .map(|i| "<{[(".repeat(8 + i % 8))
            .collect(),
        "early_corruption" => (0..lines)
            .map(|i| format!("(]{}", "()".repeat(40 + i % 20)))
            .collect(),
        _ => (0..lines)
            .map(|i| REFERENCE[i % REFERENCE.len()].to_string())
            .collect(),
    }
}

/// Benchmark classification with different line shapes
fn bench_line_shapes(c: &mut Criterion) {
    let scenarios = ["all_valid", "deep_incomplete", "early_corruption", "reference_mix"];

    let mut group = c.benchmark_group("line_shapes");

    for scenario in scenarios {
        let content_lines = generate_content(5000, scenario);
        let content = content_lines.join("\n");

        group.throughput(Throughput::Elements(content_lines.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("scenario", scenario),
            &content,
            |b, content| {
                b.iter(|| {
                    let result = validate_document(black_box(content));
                    black_box(result)
                })
            },
        );
    }

    group.finish();
}

/// Benchmark end-to-end scoring with different input sizes
fn bench_scoring_scalability(c: &mut Criterion) {
    let table = ScoreTable::aoc_2021();
    let sizes = [100, 1_000, 10_000, 50_000];

    let mut group = c.benchmark_group("scoring_scalability");

    for &size in &sizes {
        let content = generate_content(size, "reference_mix").join("\n");

        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::new("size", size), &content, |b, content| {
            b.iter(|| {
                let scores = validate_document(black_box(content))
                    .map(|result| Scores::from_validation(&result, &table));
                black_box(scores)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_line_shapes, bench_scoring_scalability);
criterion_main!(benches);
