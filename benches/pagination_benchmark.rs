//! Benchmarks for pagination and catalog filtering.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use resort_site::catalog::{Catalog, SortOrder};
use resort_site::models::Villa;
use resort_site::pagination::{compute_visible_page_indices, paginate};

fn villas(count: usize) -> Vec<Villa> {
    (0..count)
        .map(|i| Villa {
            id: format!("villa-{i}"),
            name: format!("Villa {i}"),
            description: if i % 3 == 0 {
                "Over-water villa with lagoon access".to_string()
            } else {
                "Garden villa with plunge pool".to_string()
            },
            price_per_night: Some(300.0 + (i % 17) as f64 * 25.0),
            max_guests: 2 + (i % 4) as u32,
            bedrooms: 1 + (i % 3) as u32,
            image_urls: Vec::new(),
            amenities: vec!["Butler".to_string()],
            created_at: None,
        })
        .collect()
}

fn bench_paginate(c: &mut Criterion) {
    let data: Vec<u64> = (0..100_000).collect();
    let mut group = c.benchmark_group("paginate");
    for page in [1usize, 500, 9_999] {
        group.bench_with_input(BenchmarkId::from_parameter(page), &page, |b, &page| {
            b.iter(|| paginate(black_box(&data), black_box(page), 10).len())
        });
    }
    group.finish();
}

fn bench_markers(c: &mut Criterion) {
    c.bench_function("compute_visible_page_indices", |b| {
        b.iter(|| {
            for current in 1..=200 {
                black_box(compute_visible_page_indices(black_box(current), 200, 5));
            }
        })
    });
}

fn bench_catalog_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("catalog_query");
    for size in [100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut catalog = Catalog::new(6);
            catalog.set_items(villas(size));
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                catalog.set_query(if flip { "lagoon" } else { "pool" });
                black_box(catalog.visible().len())
            })
        });
    }
    group.finish();
}

fn bench_catalog_sort(c: &mut Criterion) {
    let mut catalog = Catalog::new(6);
    catalog.set_items(villas(10_000));
    c.bench_function("catalog_cycle_sort_10k", |b| {
        b.iter(|| {
            let order: SortOrder = catalog.cycle_sort();
            black_box(order)
        })
    });
}

criterion_group!(
    benches,
    bench_paginate,
    bench_markers,
    bench_catalog_query,
    bench_catalog_sort
);
criterion_main!(benches);
