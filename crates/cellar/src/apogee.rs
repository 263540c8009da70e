//! Apogee (drinking-window) classification of inventory records.
//!
//! Records either carry explicit apogee dates or fall back to a default window
//! derived from vintage year and beverage type. The offsets live in
//! [`ApogeePolicy`] as data so every caller derives the same window.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glou_core::Entity;

use crate::item::{BeverageType, InventoryItem, ItemKind};
use crate::window::{ApogeeStatus, DateWindow, classify};

/// Default window as year offsets from the vintage (window bounds fall on Jan 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOffsets {
    pub start_years: i32,
    pub end_years: i32,
}

impl WindowOffsets {
    pub const fn new(start_years: i32, end_years: i32) -> Self {
        Self {
            start_years,
            end_years,
        }
    }

    pub const RED: WindowOffsets = WindowOffsets::new(3, 10);
    pub const WHITE: WindowOffsets = WindowOffsets::new(2, 6);
    pub const ROSE: WindowOffsets = WindowOffsets::new(0, 2);
    pub const SPARKLING: WindowOffsets = WindowOffsets::new(3, 8);
    pub const BEER: WindowOffsets = WindowOffsets::new(0, 2);

    /// Window for `vintage_year`, or `EMPTY` if a bound leaves chrono's date range.
    pub fn window_for(&self, vintage_year: i32) -> DateWindow {
        let start = jan_first(vintage_year, self.start_years);
        let end = jan_first(vintage_year, self.end_years);
        match (start, end) {
            (Some(start), Some(end)) => DateWindow::new(Some(start), Some(end)),
            _ => DateWindow::EMPTY,
        }
    }
}

fn jan_first(vintage_year: i32, offset: i32) -> Option<NaiveDate> {
    let year = vintage_year.checked_add(offset)?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// How to read a window whose start falls after its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedWindowPolicy {
    /// Apply the classification rules as-is (see [`classify`]).
    #[default]
    Literal,
    /// Report `Unknown` for any malformed window.
    Unknown,
}

/// Default-window offsets per beverage type plus the malformed-window policy.
///
/// `None` means the type has no default window (spirits do not age in bottle).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApogeePolicy {
    pub red: Option<WindowOffsets>,
    pub white: Option<WindowOffsets>,
    pub rose: Option<WindowOffsets>,
    pub sparkling: Option<WindowOffsets>,
    pub beer: Option<WindowOffsets>,
    pub spirit: Option<WindowOffsets>,
    pub malformed: MalformedWindowPolicy,
}

impl Default for ApogeePolicy {
    fn default() -> Self {
        Self {
            red: Some(WindowOffsets::RED),
            white: Some(WindowOffsets::WHITE),
            rose: Some(WindowOffsets::ROSE),
            sparkling: Some(WindowOffsets::SPARKLING),
            beer: Some(WindowOffsets::BEER),
            spirit: None,
            malformed: MalformedWindowPolicy::Literal,
        }
    }
}

impl ApogeePolicy {
    pub fn with_malformed(mut self, malformed: MalformedWindowPolicy) -> Self {
        self.malformed = malformed;
        self
    }

    pub fn offsets_for(&self, beverage_type: BeverageType) -> Option<WindowOffsets> {
        match beverage_type {
            BeverageType::Red => self.red,
            BeverageType::White => self.white,
            BeverageType::Rose => self.rose,
            BeverageType::Sparkling => self.sparkling,
            BeverageType::Beer => self.beer,
            BeverageType::Spirit => self.spirit,
        }
    }

    pub fn default_window(&self, vintage_year: i32, beverage_type: BeverageType) -> DateWindow {
        self.offsets_for(beverage_type)
            .map(|offsets| offsets.window_for(vintage_year))
            .unwrap_or(DateWindow::EMPTY)
    }
}

/// Default window for a vintage and beverage type under the stock offsets.
pub fn default_window_for(vintage_year: i32, beverage_type: BeverageType) -> DateWindow {
    ApogeePolicy::default().default_window(vintage_year, beverage_type)
}

/// Classifies inventory records against their drinking window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApogeeClassifier {
    policy: ApogeePolicy,
}

impl ApogeeClassifier {
    pub fn new(policy: ApogeePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ApogeePolicy {
        &self.policy
    }

    /// Window that applies to `item`.
    ///
    /// Explicit apogee dates win as soon as one is present (a half-filled pair
    /// stays half-filled and reads `Unknown`). Otherwise wines with a vintage get
    /// the policy's default window; tobacco and vintage-less wines get `EMPTY`.
    pub fn window_for(&self, item: &InventoryItem) -> DateWindow {
        if item.has_explicit_apogee() {
            return DateWindow::new(item.min_apogee_date(), item.max_apogee_date());
        }
        if item.kind() == ItemKind::Tobacco {
            return DateWindow::EMPTY;
        }
        match (item.vintage_year(), item.beverage_type()) {
            (Some(vintage), Some(beverage_type)) => {
                self.policy.default_window(vintage, beverage_type)
            }
            _ => DateWindow::EMPTY,
        }
    }

    pub fn status(&self, item: &InventoryItem, today: NaiveDate) -> ApogeeStatus {
        let window = self.window_for(item);
        if !window.is_well_formed() && self.policy.malformed == MalformedWindowPolicy::Unknown {
            tracing::warn!(item_id = %item.id(), ?window, "malformed apogee window; reporting unknown");
            return ApogeeStatus::Unknown;
        }
        classify(&window, today)
    }
}
