use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glou_core::{DomainError, DomainResult, Entity, ItemId};

/// What kind of product an inventory record tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Wine,
    Tobacco,
}

/// Beverage family of a bottle.
///
/// Serialized with the backend's `bottle_type` tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BeverageType {
    #[serde(rename = "red_wine")]
    Red,
    #[serde(rename = "white_wine")]
    White,
    #[serde(rename = "rose_wine")]
    Rose,
    #[serde(rename = "sparkling_wine")]
    Sparkling,
    #[serde(rename = "beer")]
    Beer,
    #[serde(rename = "spirit")]
    Spirit,
}

impl BeverageType {
    pub const ALL: [BeverageType; 6] = [
        BeverageType::Red,
        BeverageType::White,
        BeverageType::Rose,
        BeverageType::Sparkling,
        BeverageType::Beer,
        BeverageType::Spirit,
    ];

    /// Backend tag for this type (also used as the aggregation label).
    pub fn as_str(&self) -> &'static str {
        match self {
            BeverageType::Red => "red_wine",
            BeverageType::White => "white_wine",
            BeverageType::Rose => "rose_wine",
            BeverageType::Sparkling => "sparkling_wine",
            BeverageType::Beer => "beer",
            BeverageType::Spirit => "spirit",
        }
    }

    /// Parse a backend tag. Unknown tags (including `cigar`) yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tag)
    }
}

impl core::fmt::Display for BeverageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only inventory snapshot for one bottle reference or tobacco lot.
///
/// Built either from the API wire records (see [`crate::record`]) or directly
/// with the `wine`/`tobacco` constructors and `with_*` builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    id: ItemId,
    kind: ItemKind,
    #[serde(default)]
    name: String,
    vintage_year: Option<i32>,
    beverage_type: Option<BeverageType>,
    quantity_on_hand: i64,
    #[serde(default)]
    quantity_consumed: i64,
    min_apogee_date: Option<NaiveDate>,
    max_apogee_date: Option<NaiveDate>,
    price: Option<f64>,
    region: Option<String>,
}

impl InventoryItem {
    /// A wine-kind record (wine, beer and spirits all live in the cave).
    pub fn wine(id: ItemId, beverage_type: BeverageType) -> Self {
        Self::wine_of_type(id, Some(beverage_type))
    }

    /// Wire records may carry a bottle type this crate does not know.
    pub(crate) fn wine_of_type(id: ItemId, beverage_type: Option<BeverageType>) -> Self {
        Self {
            id,
            kind: ItemKind::Wine,
            name: String::new(),
            vintage_year: None,
            beverage_type,
            quantity_on_hand: 0,
            quantity_consumed: 0,
            min_apogee_date: None,
            max_apogee_date: None,
            price: None,
            region: None,
        }
    }

    /// A tobacco lot. Tobacco has no vintage and no beverage type.
    pub fn tobacco(id: ItemId) -> Self {
        Self {
            id,
            kind: ItemKind::Tobacco,
            name: String::new(),
            vintage_year: None,
            beverage_type: None,
            quantity_on_hand: 0,
            quantity_consumed: 0,
            min_apogee_date: None,
            max_apogee_date: None,
            price: None,
            region: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Ignored for tobacco lots.
    pub fn with_vintage(mut self, vintage_year: i32) -> Self {
        if self.kind == ItemKind::Wine {
            self.vintage_year = Some(vintage_year);
        }
        self
    }

    pub fn with_quantity(mut self, on_hand: i64) -> Self {
        self.quantity_on_hand = on_hand;
        self
    }

    pub fn with_consumed(mut self, consumed: i64) -> Self {
        self.quantity_consumed = consumed;
        self
    }

    pub fn with_apogee(mut self, min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        self.min_apogee_date = min;
        self.max_apogee_date = max;
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        let region = region.into();
        self.region = if region.trim().is_empty() { None } else { Some(region) };
        self
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vintage_year(&self) -> Option<i32> {
        self.vintage_year
    }

    pub fn beverage_type(&self) -> Option<BeverageType> {
        self.beverage_type
    }

    pub fn quantity_on_hand(&self) -> i64 {
        self.quantity_on_hand
    }

    pub fn quantity_consumed(&self) -> i64 {
        self.quantity_consumed
    }

    pub fn min_apogee_date(&self) -> Option<NaiveDate> {
        self.min_apogee_date
    }

    pub fn max_apogee_date(&self) -> Option<NaiveDate> {
        self.max_apogee_date
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// True when the record carries at least one explicit apogee date.
    pub fn has_explicit_apogee(&self) -> bool {
        self.min_apogee_date.is_some() || self.max_apogee_date.is_some()
    }

    /// Boundary validation for API responses.
    ///
    /// The analytics functions never call this: they sum whatever they are given.
    pub fn validate(&self) -> DomainResult<()> {
        if self.quantity_on_hand < 0 {
            return Err(DomainError::validation(format!(
                "item {}: quantity on hand cannot be negative ({})",
                self.id, self.quantity_on_hand
            )));
        }
        if self.quantity_consumed < 0 {
            return Err(DomainError::validation(format!(
                "item {}: consumed quantity cannot be negative ({})",
                self.id, self.quantity_consumed
            )));
        }
        if let Some(price) = self.price {
            if !price.is_finite() || price < 0.0 {
                return Err(DomainError::validation(format!(
                    "item {}: price must be a finite non-negative number ({price})",
                    self.id
                )));
            }
        }
        if let (Some(min), Some(max)) = (self.min_apogee_date, self.max_apogee_date) {
            if min > max {
                return Err(DomainError::invariant(format!(
                    "item {}: apogee window starts ({min}) after it ends ({max})",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

impl Entity for InventoryItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
