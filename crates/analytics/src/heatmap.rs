//! Region × type heatmap.

use serde::{Deserialize, Serialize};

use glou_cellar::InventoryItem;

use crate::engine::{AggregationBucket, BucketOrder, aggregate_by_key};
use crate::keys::{by_quantity, type_key, wine_region_key};

/// One tile of the regional heatmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionHeat {
    pub region: String,
    pub total: i64,
    /// Bottles per type within the region, largest first.
    pub by_type: Vec<AggregationBucket>,
}

/// Bottles per wine region with a per-type breakdown, regions ordered by total
/// (largest first, ties in first-seen order). Tobacco lots are not plotted.
pub fn region_heatmap(items: &[InventoryItem]) -> Vec<RegionHeat> {
    aggregate_by_key(items, wine_region_key, by_quantity, BucketOrder::CountDescending)
        .into_iter()
        .map(|region| {
            let by_type = aggregate_by_key(
                items
                    .iter()
                    .filter(|item| wine_region_key(item).as_deref() == Some(region.label.as_str())),
                type_key,
                by_quantity,
                BucketOrder::CountDescending,
            );
            RegionHeat {
                region: region.label,
                total: region.count,
                by_type,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::UNKNOWN_REGION;
    use glou_cellar::BeverageType;
    use glou_core::ItemId;

    fn bottle(id: i64, t: BeverageType, region: &str, qty: i64) -> InventoryItem {
        InventoryItem::wine(ItemId::new(id), t)
            .with_region(region)
            .with_quantity(qty)
    }

    #[test]
    fn regions_are_ranked_with_type_breakdown() {
        let items = vec![
            bottle(1, BeverageType::White, "Alsace", 3),
            bottle(2, BeverageType::Red, "Bordeaux", 12),
            bottle(3, BeverageType::White, "Bordeaux", 4),
            bottle(4, BeverageType::Red, "Bordeaux", 1),
        ];

        let heat = region_heatmap(&items);
        assert_eq!(heat.len(), 2);
        assert_eq!(heat[0].region, "Bordeaux");
        assert_eq!(heat[0].total, 17);
        assert_eq!(
            heat[0].by_type,
            vec![
                AggregationBucket::new("red_wine", 13),
                AggregationBucket::new("white_wine", 4),
            ]
        );
        assert_eq!(heat[1].region, "Alsace");
        assert_eq!(heat[1].by_type, vec![AggregationBucket::new("white_wine", 3)]);
    }

    #[test]
    fn regionless_bottles_share_the_unknown_tile() {
        let items = vec![
            InventoryItem::wine(ItemId::new(1), BeverageType::Red).with_quantity(5),
            InventoryItem::wine(ItemId::new(2), BeverageType::Beer).with_quantity(2),
        ];
        let heat = region_heatmap(&items);
        assert_eq!(heat.len(), 1);
        assert_eq!(heat[0].region, UNKNOWN_REGION);
        assert_eq!(heat[0].total, 7);
    }

    #[test]
    fn tobacco_origins_are_not_tiles() {
        let items = vec![
            InventoryItem::tobacco(ItemId::new(1))
                .with_quantity(25)
                .with_region("Cuba"),
            InventoryItem::tobacco(ItemId::new(2)).with_quantity(4),
            bottle(3, BeverageType::Red, "Bordeaux", 6),
        ];
        let heat = region_heatmap(&items);
        assert_eq!(
            heat,
            vec![RegionHeat {
                region: "Bordeaux".to_string(),
                total: 6,
                by_type: vec![AggregationBucket::new("red_wine", 6)],
            }]
        );
    }

    #[test]
    fn tiles_serialize_for_the_screen() {
        let heat = region_heatmap(&[bottle(1, BeverageType::Rose, "Provence", 4)]);
        let json = serde_json::to_value(&heat).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{
                "region": "Provence",
                "total": 4,
                "by_type": [{ "label": "rose_wine", "count": 4 }]
            }])
        );
    }

    #[test]
    fn empty_input() {
        assert!(region_heatmap(&[]).is_empty());
    }
}
