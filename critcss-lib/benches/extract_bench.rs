extern crate criterion;

use criterion::{criterion_group, criterion_main, Criterion};

use critcss_lib::{extract, CssSource, WantedSelectors};

fn bench_large_stylesheet(c: &mut Criterion) {
    let mut css = String::with_capacity(1_000_000);
    for i in 0..10_000 {
        css.push_str(&format!(
            ".rule-{} {{ color: #333; padding: {}px; }}\n",
            i,
            i % 48
        ));
    }
    css.push_str(".btn { padding: 10px 20px; border: none; }\n");
    let source = CssSource::inline(css);
    let wanted = WantedSelectors::from_classes(["btn"]);

    c.bench_function("large_stylesheet", |b| {
        b.iter(|| extract(&source, &wanted).unwrap())
    });
}

fn bench_media_heavy_stylesheet(c: &mut Criterion) {
    let mut css = String::new();
    for i in 0..1_000 {
        css.push_str(&format!(
            "@media (min-width: {}px) {{ .btn {{ padding: {}px; }} .unused-{} {{ display: none; }} }}\n",
            320 + i,
            i % 24,
            i
        ));
    }
    let source = CssSource::inline(css);
    let wanted = WantedSelectors::from_classes(["btn"]);

    c.bench_function("media_heavy_stylesheet", |b| {
        b.iter(|| extract(&source, &wanted).unwrap())
    });
}

criterion_group!(
    benches,
    bench_large_stylesheet,
    bench_media_heavy_stylesheet
);
criterion_main!(benches);
