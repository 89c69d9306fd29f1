//! Performance benchmarks for html-harvest.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - A small synthetic product page for microbenchmarks
//! - Generated pages with many tables and form controls for scaling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use html_harvest::{analyze, extract, extract_with_options, Category, Options};

const SAMPLE_HTML: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Garden Tools</title>
    <meta name="description" content="Spades, rakes and shears.">
    <meta property="og:type" content="product">
</head>
<body>
    <nav><a href="/">Home</a> <a href="https://partner.example.org/">Partner</a></nav>
    <h1>Garden Tools</h1>
    <p>Hand-forged tools for every season. Questions? Write shop@example.com
    or call (555) 010-2030.</p>
    <img src="/img/spade.jpg" alt="Spade" width="300">
    <span class="price">$24.99</span>
    <table>
        <thead><tr><th>Tool</th><th>Weight</th><th>Price</th></tr></thead>
        <tbody>
            <tr><td>Spade</td><td>1.2kg</td><td>$24.99</td></tr>
            <tr><td>Rake</td><td>0.9kg</td><td>$1,019.00</td></tr>
        </tbody>
    </table>
    <iframe src="https://www.youtube.com/embed/abc" title="Demo"></iframe>
    <form action="/subscribe" method="post">
        <input type="hidden" name="csrf" value="x">
        <label for="email">Email</label><input id="email" name="email" type="email" required>
        <select name="freq"><option value="w">Weekly</option><option value="m">Monthly</option></select>
        <button type="submit">Subscribe</button>
    </form>
</body>
</html>
"#;

fn generated_page(rows: usize) -> String {
    let mut html = String::from("<html><body>");
    for t in 0..4 {
        html.push_str(&format!("<table><tr><th>Item {t}</th><th>Price</th></tr>"));
        for r in 0..rows {
            html.push_str(&format!("<tr><td>Row {r}</td><td>${r}.00</td></tr>"));
        }
        html.push_str("</table>");
    }
    html.push_str("<form>");
    for r in 0..rows {
        html.push_str(&format!("<label>Field {r}<input name=\"field_{r}\"></label>"));
    }
    html.push_str("</form></body></html>");
    html
}

fn bench_extract_default(c: &mut Criterion) {
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(SAMPLE_HTML)));
    });
}

fn bench_extract_with_options(c: &mut Criterion) {
    let options = Options {
        url: Some("https://shop.example.com/tools".to_string()),
        categories: [Category::Tables, Category::Forms].into_iter().collect(),
        ..Options::default()
    };

    c.bench_function("extract_with_options", |b| {
        b.iter(|| extract_with_options(black_box(SAMPLE_HTML), black_box(&options)));
    });
}

fn bench_tables(c: &mut Criterion) {
    c.bench_function("normalize_tables", |b| {
        let result = extract(SAMPLE_HTML);
        b.iter(|| result.as_ref().map(|r| black_box(r.tables())));
    });
}

fn bench_analyze(c: &mut Criterion) {
    let options = Options::default();
    c.bench_function("analyze", |b| {
        b.iter(|| analyze(black_box(SAMPLE_HTML), &options));
    });
}

/// Larger generated pages
fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for rows in [10, 100, 1000] {
        let html = generated_page(rows);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", rows), &html, |b, html| {
            b.iter(|| extract(black_box(html)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_extract_with_options,
    bench_tables,
    bench_analyze,
    bench_scaling
);
criterion_main!(benches);
