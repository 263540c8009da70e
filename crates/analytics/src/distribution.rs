//! The chart series the analytics screens draw, each one a single engine call.

use glou_cellar::InventoryItem;

use crate::engine::{AggregationBucket, BucketOrder, aggregate_by_key};
use crate::keys::{
    apogee_year_key, by_bottle_or_lot, by_entry, by_quantity, price_band_key, type_key,
    wine_region_key,
};

/// Bottles per type (one per tobacco lot), in first-seen order.
pub fn type_distribution(items: &[InventoryItem]) -> Vec<AggregationBucket> {
    aggregate_by_key(items, type_key, by_bottle_or_lot, BucketOrder::FirstSeen)
}

/// Bottles per wine region, largest first. Tobacco is left out.
pub fn region_distribution(items: &[InventoryItem]) -> Vec<AggregationBucket> {
    aggregate_by_key(items, wine_region_key, by_quantity, BucketOrder::CountDescending)
}

/// References per price band, in first-seen order; empty bands are omitted.
pub fn price_distribution(items: &[InventoryItem]) -> Vec<AggregationBucket> {
    aggregate_by_key(items, price_band_key, by_entry, BucketOrder::FirstSeen)
}

/// References per year of apogee end, oldest year first.
pub fn apogee_timeline(items: &[InventoryItem]) -> Vec<AggregationBucket> {
    let mut buckets = aggregate_by_key(items, apogee_year_key, by_entry, BucketOrder::FirstSeen);
    buckets.sort_by_key(|b| b.label.parse::<i32>().unwrap_or(i32::MAX));
    buckets
}
