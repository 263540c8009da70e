//! Key and weight functions for [`crate::aggregate_by_key`].

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use glou_cellar::{InventoryItem, ItemKind};

/// Label for records without a region.
pub const UNKNOWN_REGION: &str = "Unknown";
/// Type label for tobacco lots.
pub const TOBACCO_LABEL: &str = "tobacco";
/// Type label for bottles whose type the backend did not tell us.
pub const OTHER_LABEL: &str = "other";

/// Fixed price bands (half-open intervals, euros).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceBand {
    /// `[0, 20)`
    Under20,
    /// `[20, 50)`
    From20To50,
    /// `[50, 100)`
    From50To100,
    /// `[100, ∞)`
    Over100,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::Under20,
        PriceBand::From20To50,
        PriceBand::From50To100,
        PriceBand::Over100,
    ];

    /// Band for a price. Missing and non-finite prices count as `0`.
    pub fn of(price: Option<f64>) -> Self {
        let price = price.filter(|p| p.is_finite()).unwrap_or(0.0);
        if price < 20.0 {
            PriceBand::Under20
        } else if price < 50.0 {
            PriceBand::From20To50
        } else if price < 100.0 {
            PriceBand::From50To100
        } else {
            PriceBand::Over100
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBand::Under20 => "<20€",
            PriceBand::From20To50 => "20-50€",
            PriceBand::From50To100 => "50-100€",
            PriceBand::Over100 => ">100€",
        }
    }
}

/// Beverage tag, `tobacco`, or `other`.
pub fn type_key(item: &InventoryItem) -> Option<String> {
    let label = match (item.kind(), item.beverage_type()) {
        (ItemKind::Tobacco, _) => TOBACCO_LABEL,
        (ItemKind::Wine, Some(beverage_type)) => beverage_type.as_str(),
        (ItemKind::Wine, None) => OTHER_LABEL,
    };
    Some(label.to_string())
}

/// Region name, or [`UNKNOWN_REGION`].
pub fn region_key(item: &InventoryItem) -> Option<String> {
    Some(item.region().unwrap_or(UNKNOWN_REGION).to_string())
}

/// [`region_key`] for wine-kind records; tobacco origins are not cave regions.
pub fn wine_region_key(item: &InventoryItem) -> Option<String> {
    match item.kind() {
        ItemKind::Wine => region_key(item),
        ItemKind::Tobacco => None,
    }
}

pub fn price_band_key(item: &InventoryItem) -> Option<String> {
    Some(PriceBand::of(item.price()).label().to_string())
}

/// Calendar year of the latest apogee date; records without one are excluded.
pub fn apogee_year_key(item: &InventoryItem) -> Option<String> {
    item.max_apogee_date().map(|d| d.year().to_string())
}

/// Bottle count.
pub fn by_quantity(item: &InventoryItem) -> i64 {
    item.quantity_on_hand()
}

/// One per record (distinct entries, e.g. tobacco lots).
pub fn by_entry(_item: &InventoryItem) -> i64 {
    1
}

/// Bottles for wine-kind records, one per tobacco lot.
pub fn by_bottle_or_lot(item: &InventoryItem) -> i64 {
    match item.kind() {
        ItemKind::Wine => by_quantity(item),
        ItemKind::Tobacco => by_entry(item),
    }
}
