//! Performance benchmarks for densitext.
//!
//! Run with: `cargo bench`
//!
//! Covers a small synthetic article for microbenchmarks plus generated
//! pages of increasing size to watch the linear-time pipeline scale.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use densitext::{parse, parse_with_options, Options};

const SAMPLE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Sample Article</title>
<style>body { margin: 0; }</style>
<script>console.log("boilerplate");</script>
</head>
<body>
<nav><a href="/">Home</a> <a href="/about">About</a></nav>
<article>
<h1>Sample Article Title</h1>
<p>This is the first paragraph of the article. It contains some meaningful content that the density pass should keep inside the located region.</p>
<p>Here is a second paragraph with more content. The extraction should keep the text while the navigation and footer fall below the threshold.</p>
<p>A third paragraph ensures the block distribution has a wide dense span for meaningful benchmarking of the boundary search.</p>
</article>
<footer><p>Copyright 2024</p></footer>
</body>
</html>
"#;

fn bench_parse_default(c: &mut Criterion) {
    c.bench_function("parse_default", |b| {
        b.iter(|| parse(black_box(SAMPLE_HTML)));
    });
}

fn bench_parse_with_options(c: &mut Criterion) {
    let options = Options {
        threshold: 120,
        preserve_whitespace: true,
        ..Options::default()
    };

    c.bench_function("parse_with_options", |b| {
        b.iter(|| parse_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

/// Generated pages of increasing size to confirm linear scaling.
fn bench_generated_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("generated");

    for paragraphs in [100_usize, 1_000, 10_000] {
        let mut html = String::from("<html><body>\n");
        for i in 0..paragraphs {
            html.push_str(&format!(
                "<p>Paragraph {i} with a steady amount of body text so every \
                 window lands above the threshold.</p>\n"
            ));
        }
        html.push_str("</body></html>\n");

        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("parse", format!("{paragraphs} paragraphs")),
            &html,
            |b, html| {
                b.iter(|| parse(black_box(html)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_default,
    bench_parse_with_options,
    bench_generated_pages
);
criterion_main!(benches);
