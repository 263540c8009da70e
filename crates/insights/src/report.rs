use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glou_alerts::{AlertCandidate, derive_candidates, low_stock, ready_to_drink};
use glou_analytics::{
    AggregationBucket, CollectionSummary, RegionHeat, apogee_timeline, price_distribution,
    region_distribution, region_heatmap, top, type_distribution,
};
use glou_cellar::InventoryItem;
use glou_core::ItemId;

use crate::config::InsightsConfig;

/// All derived views of one inventory snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    pub generated_for: NaiveDate,
    pub summary: CollectionSummary,
    pub by_type: Vec<AggregationBucket>,
    pub top_regions: Vec<AggregationBucket>,
    pub price_bands: Vec<AggregationBucket>,
    pub apogee_timeline: Vec<AggregationBucket>,
    pub heatmap: Vec<RegionHeat>,
    pub ready_to_drink: Vec<ItemId>,
    pub low_stock: Vec<ItemId>,
    pub alert_candidates: Vec<AlertCandidate>,
}

impl DashboardReport {
    /// Pure: same items, date and config always produce the same report.
    pub fn build(items: &[InventoryItem], today: NaiveDate, config: &InsightsConfig) -> Self {
        let classifier = config.classifier();

        let report = Self {
            generated_for: today,
            summary: CollectionSummary::compute(items, today, &classifier),
            by_type: type_distribution(items),
            top_regions: top(region_distribution(items), config.top_regions),
            price_bands: price_distribution(items),
            apogee_timeline: apogee_timeline(items),
            heatmap: region_heatmap(items),
            ready_to_drink: ready_to_drink(items, today, &classifier)
                .into_iter()
                .map(InventoryItem::id_typed)
                .collect(),
            low_stock: low_stock(items, config.low_stock_threshold)
                .into_iter()
                .map(InventoryItem::id_typed)
                .collect(),
            alert_candidates: derive_candidates(
                items,
                today,
                &classifier,
                config.low_stock_threshold,
            ),
        };

        tracing::info!(
            %today,
            entries = report.summary.entries,
            ready = report.ready_to_drink.len(),
            low_stock = report.low_stock.len(),
            "dashboard report built"
        );
        report
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glou_cellar::BeverageType;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_snapshot_gives_empty_report() {
        let report = DashboardReport::build(&[], date(2025, 6, 1), &InsightsConfig::default());
        assert_eq!(report.summary, CollectionSummary::default());
        assert!(report.by_type.is_empty());
        assert!(report.top_regions.is_empty());
        assert!(report.price_bands.is_empty());
        assert!(report.apogee_timeline.is_empty());
        assert!(report.heatmap.is_empty());
        assert!(report.ready_to_drink.is_empty());
        assert!(report.low_stock.is_empty());
        assert!(report.alert_candidates.is_empty());
    }

    #[test]
    fn top_regions_respects_config() {
        let items: Vec<_> = ["A", "B", "C", "D"]
            .into_iter()
            .enumerate()
            .map(|(i, region)| {
                InventoryItem::wine(ItemId::new(i as i64), BeverageType::Red)
                    .with_region(region)
                    .with_quantity(i as i64 + 1)
            })
            .collect();
        let config = InsightsConfig {
            top_regions: 2,
            ..InsightsConfig::default()
        };

        let report = DashboardReport::build(&items, date(2025, 6, 1), &config);
        assert_eq!(
            report.top_regions,
            vec![AggregationBucket::new("D", 4), AggregationBucket::new("C", 3)]
        );
        assert_eq!(report.heatmap.len(), 4);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: building twice from the same snapshot yields the same report.
        #[test]
        fn build_is_deterministic(
            rows in prop::collection::vec((0usize..6, 1990i32..2030, 0i64..24, 0u32..300), 0..25)
        ) {
            let items: Vec<_> = rows
                .iter()
                .enumerate()
                .map(|(i, (t, vintage, qty, price))| {
                    InventoryItem::wine(ItemId::new(i as i64), BeverageType::ALL[*t])
                        .with_vintage(*vintage)
                        .with_quantity(*qty)
                        .with_price(f64::from(*price))
                })
                .collect();
            let today = date(2025, 6, 1);
            let config = InsightsConfig::default();

            let first = DashboardReport::build(&items, today, &config);
            let second = DashboardReport::build(&items, today, &config);
            prop_assert_eq!(first, second);
        }
    }
}
