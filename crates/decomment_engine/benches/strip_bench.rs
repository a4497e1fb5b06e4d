//! Benchmark harness for the comment-stripping machines.
//!
//! Uses criterion for reliable benchmarking.
//! Run with: cargo bench -p decomment_engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decomment_engine::{strip_auto, strip_css, strip_html, strip_javascript};

/// Small JavaScript source for micro-benchmarks.
const JS_SOURCE: &str = r#"
// module header
const BASE = "https://example.com"; /* endpoint root */
const matcher = /^[a-z]+\/\d+$/i;
function render(items) {
    return items.map((item) => `<li>${item.name /* display name */}</li>`).join("\n");
}
const half = total / 2; // midpoint
"#;

/// Small stylesheet for micro-benchmarks.
const CSS_SOURCE: &str = r#"
/* layout */
.container {
    background: url("bg/main.png"); /* tiled */
    margin: 0 auto;
}
#header { content: "/* keep me */"; }
@media (max-width: 600px) {
    .container { padding: 1rem; } /* phones */
}
"#;

/// Small document mixing all three grammars.
const HTML_SOURCE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <!-- build: 1234 -->
    <style>body { color: red; /* brand */ }</style>
    <script>const x = 5; // counter
    </script>
</head>
<body><div title="<!-- literal -->">Content</div></body>
</html>
"#;

/// Generate a large JavaScript source with a fixed comment density.
fn generate_large_js(functions: usize) -> String {
    let mut source = String::new();
    for i in 0..functions {
        source.push_str(&format!(
            "// helper {i}\nfunction helper{i}(a, b) {{\n    /* fold {i} */\n    const re = /x{i}+/g;\n    return `${{a}} and ${{b /* pair */}}`;\n}}\n\n"
        ));
    }
    source
}

fn bench_javascript(c: &mut Criterion) {
    let mut group = c.benchmark_group("javascript");

    group.bench_function("small", |b| {
        b.iter(|| strip_javascript(black_box(JS_SOURCE)));
    });

    let large = generate_large_js(200);
    group.bench_function("large", |b| {
        b.iter(|| strip_javascript(black_box(&large)));
    });

    group.finish();
}

fn bench_css(c: &mut Criterion) {
    let mut group = c.benchmark_group("css");

    group.bench_function("small", |b| {
        b.iter(|| strip_css(black_box(CSS_SOURCE)));
    });

    let large = CSS_SOURCE.repeat(200);
    group.bench_function("large", |b| {
        b.iter(|| strip_css(black_box(&large)));
    });

    group.finish();
}

fn bench_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("html");

    group.bench_function("small", |b| {
        b.iter(|| strip_html(black_box(HTML_SOURCE)));
    });

    group.finish();
}

fn bench_auto(c: &mut Criterion) {
    let mut group = c.benchmark_group("auto");

    for (name, source) in [("js", JS_SOURCE), ("css", CSS_SOURCE), ("html", HTML_SOURCE)] {
        group.bench_with_input(BenchmarkId::new("sniff_and_strip", name), source, |b, source| {
            b.iter(|| strip_auto(black_box(source)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_javascript, bench_css, bench_html, bench_auto);
criterion_main!(benches);
