//! Benchmarks for specification evaluation and filtering
//!
//! Run with: cargo bench --package criteria

use catalog::{Color, Product, Size};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use criteria::{filter, filter_all, ColorSpecification, SizeSpecification, SpecificationExt};

const COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];
const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

/// Deterministic synthetic catalog: colors and sizes cycle out of phase so
/// every combination appears.
fn synthetic_products(count: usize) -> Vec<Product> {
    (0..count)
        .map(|i| {
            Product::new(
                i as u32,
                format!("Product {}", i),
                COLORS[i % COLORS.len()],
                SIZES[(i / COLORS.len()) % SIZES.len()],
            )
        })
        .collect()
}

fn bench_lazy_filter(c: &mut Criterion) {
    let products = synthetic_products(10_000);
    let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

    c.bench_function("lazy_filter_10k", |b| {
        b.iter(|| {
            let matched = filter(black_box(&products), &spec).count();
            black_box(matched)
        })
    });
}

fn bench_eager_filter(c: &mut Criterion) {
    let products = synthetic_products(10_000);
    let spec = ColorSpecification::new(Color::Green).and(SizeSpecification::new(Size::Large));

    c.bench_function("eager_filter_10k", |b| {
        b.iter(|| {
            let kept = filter_all(black_box(products.clone()), &spec).unwrap();
            black_box(kept)
        })
    });
}

fn bench_deep_composite(c: &mut Criterion) {
    let products = synthetic_products(10_000);
    let spec = ColorSpecification::new(Color::Green)
        .and(SizeSpecification::new(Size::Large))
        .and(ColorSpecification::new(Color::Red).not())
        .or(ColorSpecification::new(Color::Blue));

    c.bench_function("deep_composite_10k", |b| {
        b.iter(|| {
            let matched = filter(black_box(&products), &spec).count();
            black_box(matched)
        })
    });
}

criterion_group!(
    benches,
    bench_lazy_filter,
    bench_eager_filter,
    bench_deep_composite
);
criterion_main!(benches);
