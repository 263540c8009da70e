//! Wire records returned by the inventory API and their conversion into
//! [`InventoryItem`] snapshots.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use glou_core::{DomainError, ItemId};

use crate::item::{BeverageType, InventoryItem};

/// Backend tag for bottles that are really tobacco.
const CIGAR_TAG: &str = "cigar";

/// A row from the bottles endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
    /// `0` when the bottle has no vintage.
    #[serde(default)]
    pub vintage: i32,
    #[serde(default)]
    pub bottle_type: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub consumed: i64,
    #[serde(default, deserialize_with = "deserialize_api_date")]
    pub min_apogee_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_api_date")]
    pub max_apogee_date: Option<NaiveDate>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A row from the tobacco endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TobaccoRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub purchase_price: Option<f64>,
    #[serde(default)]
    pub origin_country: String,
}

impl From<BottleRecord> for InventoryItem {
    fn from(record: BottleRecord) -> Self {
        let id = ItemId::new(record.id);
        let base = if record.bottle_type == CIGAR_TAG {
            InventoryItem::tobacco(id)
        } else {
            // Unknown tags keep the record as an untyped wine.
            InventoryItem::wine_of_type(id, BeverageType::from_tag(&record.bottle_type))
        };

        let mut item = base
            .with_name(record.name)
            .with_region(record.region)
            .with_quantity(record.quantity)
            .with_consumed(record.consumed)
            .with_apogee(record.min_apogee_date, record.max_apogee_date);
        if record.vintage > 0 {
            item = item.with_vintage(record.vintage);
        }
        if let Some(price) = record.price {
            item = item.with_price(price);
        }
        item
    }
}

impl From<TobaccoRecord> for InventoryItem {
    fn from(record: TobaccoRecord) -> Self {
        let mut item = InventoryItem::tobacco(ItemId::new(record.id))
            .with_name(record.name)
            .with_region(record.origin_country)
            .with_quantity(record.quantity);
        if let Some(price) = record.purchase_price {
            item = item.with_price(price);
        }
        item
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to parse inventory snapshot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("item {item_id} rejected: {source}")]
    Invalid {
        item_id: ItemId,
        #[source]
        source: DomainError,
    },
}

/// Everything the dashboard screens fetch in one go.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    #[serde(default)]
    pub wines: Vec<BottleRecord>,
    #[serde(default)]
    pub tobacco: Vec<TobaccoRecord>,
}

impl InventorySnapshot {
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wines first, then tobacco, each in API order.
    pub fn into_items(self) -> Vec<InventoryItem> {
        self.wines
            .into_iter()
            .map(InventoryItem::from)
            .chain(self.tobacco.into_iter().map(InventoryItem::from))
            .collect()
    }

    /// Like [`Self::into_items`], but fails on the first record that does not validate.
    pub fn into_validated_items(self) -> Result<Vec<InventoryItem>, SnapshotError> {
        let items = self.into_items();
        for item in &items {
            item.validate().map_err(|source| SnapshotError::Invalid {
                item_id: item.id_typed(),
                source,
            })?;
        }
        Ok(items)
    }
}

/// Accepts `null`, an RFC 3339 timestamp (backend output), or a `YYYY-MM-DD` date
/// (form input). Timestamps keep the calendar date of their own offset.
fn deserialize_api_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    parse_api_date(raw).map(Some).map_err(serde::de::Error::custom)
}

fn parse_api_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| format!("invalid apogee date {raw:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemKind;
    use glou_core::Entity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_backend_bottle() {
        let json = r#"{
            "wines": [{
                "id": 12,
                "name": "Cote Rotie",
                "producer": "Guigal",
                "region": "Rhone",
                "vintage": 2018,
                "bottle_type": "red_wine",
                "quantity": 3,
                "consumed": 1,
                "min_apogee_date": "2023-01-01T00:00:00Z",
                "max_apogee_date": "2030-01-01",
                "price": 55.0,
                "bar_code": ""
            }]
        }"#;

        let items = InventorySnapshot::from_json(json).unwrap().into_items();
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.id(), &ItemId::new(12));
        assert_eq!(item.beverage_type(), Some(BeverageType::Red));
        assert_eq!(item.vintage_year(), Some(2018));
        assert_eq!(item.min_apogee_date(), Some(date(2023, 1, 1)));
        assert_eq!(item.max_apogee_date(), Some(date(2030, 1, 1)));
        assert_eq!(item.price(), Some(55.0));
        assert_eq!(item.region(), Some("Rhone"));
    }

    #[test]
    fn timestamp_keeps_its_own_calendar_date() {
        assert_eq!(parse_api_date("2024-03-01T23:30:00-05:00").unwrap(), date(2024, 3, 1));
    }

    #[test]
    fn missing_and_null_fields_default() {
        let json = r#"{"wines": [{"id": 1, "min_apogee_date": null, "price": null, "vintage": 0}]}"#;
        let items = InventorySnapshot::from_json(json).unwrap().into_items();
        let item = &items[0];
        assert_eq!(item.kind(), ItemKind::Wine);
        assert_eq!(item.beverage_type(), None);
        assert_eq!(item.vintage_year(), None);
        assert_eq!(item.region(), None);
        assert_eq!(item.price(), None);
        assert!(!item.has_explicit_apogee());
    }

    #[test]
    fn unknown_bottle_type_is_an_untyped_wine() {
        let json = r#"{"wines": [{"id": 3, "bottle_type": "cider", "vintage": 2020}]}"#;
        let item = &InventorySnapshot::from_json(json).unwrap().into_items()[0];
        assert_eq!(item.kind(), ItemKind::Wine);
        assert_eq!(item.beverage_type(), None);
        // untyped wines get no default window
        assert_eq!(
            crate::ApogeeClassifier::default().window_for(item),
            crate::DateWindow::EMPTY
        );
    }

    #[test]
    fn cigar_bottles_become_tobacco() {
        let json = r#"{"wines": [{"id": 5, "bottle_type": "cigar", "vintage": 2019, "quantity": 10}]}"#;
        let items = InventorySnapshot::from_json(json).unwrap().into_items();
        assert_eq!(items[0].kind(), ItemKind::Tobacco);
        assert_eq!(items[0].vintage_year(), None);
    }

    #[test]
    fn tobacco_rows_follow_wines() {
        let json = r#"{
            "tobacco": [{"id": 100, "name": "Robusto", "quantity": 4, "purchase_price": 12.5, "origin_country": "Cuba"}],
            "wines": [{"id": 1, "bottle_type": "beer", "quantity": 6}]
        }"#;
        let items = InventorySnapshot::from_json(json).unwrap().into_items();
        let ids: Vec<i64> = items.iter().map(|i| i.id_typed().get()).collect();
        assert_eq!(ids, vec![1, 100]);
        assert_eq!(items[1].kind(), ItemKind::Tobacco);
        assert_eq!(items[1].region(), Some("Cuba"));
        assert_eq!(items[1].price(), Some(12.5));
    }

    #[test]
    fn rejects_garbage_dates() {
        let json = r#"{"wines": [{"id": 1, "max_apogee_date": "next year"}]}"#;
        let err = InventorySnapshot::from_json(json).unwrap_err();
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn validated_items_reject_negative_stock() {
        let json = r#"{"wines": [{"id": 7, "bottle_type": "white_wine", "quantity": -2}]}"#;
        let err = InventorySnapshot::from_json(json)
            .unwrap()
            .into_validated_items()
            .unwrap_err();
        match err {
            SnapshotError::Invalid { item_id, source } => {
                assert_eq!(item_id, ItemId::new(7));
                assert!(matches!(source, DomainError::Validation(_)));
            }
            other => panic!("Expected Invalid error, got {other:?}"),
        }
    }

    #[test]
    fn empty_snapshot_is_empty() {
        let items = InventorySnapshot::from_json("{}").unwrap().into_items();
        assert!(items.is_empty());
    }
}
