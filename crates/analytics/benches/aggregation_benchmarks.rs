use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use glou_analytics::{
    BucketOrder, CollectionSummary, aggregate_by_key, by_quantity, price_distribution, region_heatmap,
    region_key,
};
use glou_cellar::{ApogeeClassifier, BeverageType, InventoryItem};
use glou_core::ItemId;

const REGIONS: [&str; 8] = [
    "Bordeaux", "Bourgogne", "Rhone", "Loire", "Alsace", "Champagne", "Languedoc", "Provence",
];

fn cellar(size: usize) -> Vec<InventoryItem> {
    (0..size)
        .map(|i| {
            let beverage_type = BeverageType::ALL[i % BeverageType::ALL.len()];
            InventoryItem::wine(ItemId::new(i as i64), beverage_type)
                .with_vintage(1990 + (i % 35) as i32)
                .with_quantity((i % 12) as i64)
                .with_price((i % 180) as f64 + 0.99)
                .with_region(REGIONS[i % REGIONS.len()])
        })
        .collect()
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_by_key");
    for size in [100usize, 1_000, 10_000] {
        let items = cellar(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("top_regions", size), &items, |b, items| {
            b.iter(|| {
                aggregate_by_key(
                    black_box(items.as_slice()),
                    region_key,
                    by_quantity,
                    BucketOrder::CountDescending,
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("price_bands", size), &items, |b, items| {
            b.iter(|| price_distribution(black_box(items)))
        });

        group.bench_with_input(BenchmarkId::new("heatmap", size), &items, |b, items| {
            b.iter(|| region_heatmap(black_box(items)))
        });
    }
    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let classifier = ApogeeClassifier::default();
    let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let items = cellar(10_000);

    c.bench_function("collection_summary_10k", |b| {
        b.iter(|| CollectionSummary::compute(black_box(&items), today, &classifier))
    });
}

criterion_group!(benches, bench_aggregation, bench_summary);
criterion_main!(benches);
