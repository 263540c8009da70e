//! Distribution analytics over inventory snapshots.
//!
//! One aggregation engine ([`aggregate_by_key`]) backs every chart: bottles per
//! type, top regions, price bands, the apogee timeline and the regional heatmap.
//! Counts are exact integers; percentages are left to the presentation layer.

pub mod distribution;
pub mod engine;
pub mod heatmap;
pub mod keys;
pub mod summary;

pub use distribution::{apogee_timeline, price_distribution, region_distribution, type_distribution};
pub use engine::{AggregationBucket, BucketOrder, aggregate_by_key, top, total};
pub use heatmap::{RegionHeat, region_heatmap};
pub use keys::{
    OTHER_LABEL, PriceBand, TOBACCO_LABEL, UNKNOWN_REGION, apogee_year_key, by_bottle_or_lot,
    by_entry, by_quantity, price_band_key, region_key, type_key, wine_region_key,
};
pub use summary::{CollectionSummary, StatusBreakdown};
