use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glou_cellar::{ApogeeClassifier, ApogeeStatus, InventoryItem};
use glou_core::ItemId;

/// Alert categories, tagged as the backend tags its persisted alert rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    LowStock,
    ApogeeReached,
    ApogeeEnded,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::LowStock => "low_stock",
            AlertKind::ApogeeReached => "apogee_reached",
            AlertKind::ApogeeEnded => "apogee_ended",
        }
    }
}

impl core::fmt::Display for AlertKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An alert the caller may want to persist.
///
/// Diffing against already-persisted alerts is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlertCandidate {
    pub item_id: ItemId,
    pub kind: AlertKind,
}

/// Candidates for every item, in input order; per item low stock comes first.
///
/// - `LowStock` when `quantity_on_hand <= low_stock_threshold`
/// - `ApogeeReached` when the item classifies `Ready`
/// - `ApogeeEnded` when the item classifies `Expired`
pub fn derive_candidates(
    items: &[InventoryItem],
    today: NaiveDate,
    classifier: &ApogeeClassifier,
    low_stock_threshold: i64,
) -> Vec<AlertCandidate> {
    let mut candidates = Vec::new();

    for item in items {
        let item_id = item.id_typed();
        if item.quantity_on_hand() <= low_stock_threshold {
            candidates.push(AlertCandidate {
                item_id,
                kind: AlertKind::LowStock,
            });
        }
        let apogee = match classifier.status(item, today) {
            ApogeeStatus::Ready => Some(AlertKind::ApogeeReached),
            ApogeeStatus::Expired => Some(AlertKind::ApogeeEnded),
            ApogeeStatus::Pending | ApogeeStatus::Unknown => None,
        };
        if let Some(kind) = apogee {
            candidates.push(AlertCandidate { item_id, kind });
        }
    }

    tracing::debug!(items = items.len(), candidates = candidates.len(), %today, "derived alert candidates");
    candidates
}
