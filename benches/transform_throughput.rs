//! Transform throughput benchmarks
//!
//! Measures the whole transform (parse, resolve, render, rewrite) with varying:
//! - Stylesheet sizes (10, 100, 1000 rules)
//! - Injection orders (Completion, Discovery)
//!
//! Run benchmarks: `cargo bench --bench transform_throughput`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fontinject::{
    FontFaceData, InjectionOrder, StaticFontResolver, TransformOptions, transform_with_options,
};
use std::hint::black_box;
use std::sync::Arc;
use tokio::runtime::Runtime;

const FAMILY_COUNT: usize = 20;

/// Generate a stylesheet of `rules` rules cycling through the known families
fn generate_stylesheet(rules: usize) -> String {
    (0..rules)
        .map(|i| {
            format!(
                ".rule-{i} {{\n  color: #333;\n  font-family: \"Family {}\", Arial, sans-serif;\n  margin: 0 auto;\n}}\n",
                i % FAMILY_COUNT
            )
        })
        .collect()
}

fn resolver() -> Arc<StaticFontResolver> {
    let resolver = StaticFontResolver::new();
    for i in 0..FAMILY_COUNT {
        resolver
            .add(
                format!("Family {i}"),
                vec![
                    FontFaceData::new(format!("/fonts/family-{i}.woff2")).with_weight(400),
                    FontFaceData::new(format!("/fonts/family-{i}-bold.woff2")).with_weight(700),
                ],
            )
            .expect("Failed to register family");
    }
    Arc::new(resolver)
}

/// Benchmark transform throughput with varying stylesheet sizes
fn benchmark_transform_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform_throughput");
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let resolver = resolver();
    let options = TransformOptions::default();

    for rules in [10, 100, 1000] {
        let css = generate_stylesheet(rules);
        group.throughput(Throughput::Bytes(css.len() as u64));
        group.bench_with_input(BenchmarkId::new("rules", rules), &css, |b, css| {
            b.iter(|| {
                rt.block_on(async {
                    transform_with_options(black_box(css), Arc::clone(&resolver), &options)
                        .await
                        .expect("Failed to transform")
                })
            });
        });
    }

    group.finish();
}

/// Benchmark the two injection orders on the same input
fn benchmark_injection_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("injection_order");
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let resolver = resolver();
    let css = generate_stylesheet(200);

    for order in [InjectionOrder::Completion, InjectionOrder::Discovery] {
        let options = TransformOptions {
            source_name: Some("bench.css".into()),
            order,
        };
        group.bench_function(BenchmarkId::new("order", order), |b| {
            b.iter(|| {
                rt.block_on(async {
                    transform_with_options(black_box(&css), Arc::clone(&resolver), &options)
                        .await
                        .expect("Failed to transform")
                })
            });
        });
    }

    group.finish();
}

/// Benchmark the fast path on a stylesheet without any font-family
fn benchmark_fast_path(c: &mut Criterion) {
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let resolver = resolver();
    let css = generate_stylesheet(1000).replace("font-family", "font-weight");

    c.bench_function("fast_path_1000_rules", |b| {
        b.iter(|| {
            rt.block_on(async {
                transform_with_options(black_box(&css), Arc::clone(&resolver), &TransformOptions::default())
                    .await
                    .expect("Failed to transform")
            })
        });
    });
}

criterion_group!(
    benches,
    benchmark_transform_throughput,
    benchmark_injection_order,
    benchmark_fast_path
);
criterion_main!(benches);
