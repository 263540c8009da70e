//! Headline figures of the collection dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glou_cellar::{ApogeeClassifier, ApogeeStatus, InventoryItem};

/// Bottles per apogee status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub unknown: i64,
    pub pending: i64,
    pub ready: i64,
    pub expired: i64,
}

impl StatusBreakdown {
    fn add(&mut self, status: ApogeeStatus, quantity: i64) {
        let slot = match status {
            ApogeeStatus::Unknown => &mut self.unknown,
            ApogeeStatus::Pending => &mut self.pending,
            ApogeeStatus::Ready => &mut self.ready,
            ApogeeStatus::Expired => &mut self.expired,
        };
        *slot = slot.saturating_add(quantity);
    }

    pub fn get(&self, status: ApogeeStatus) -> i64 {
        match status {
            ApogeeStatus::Unknown => self.unknown,
            ApogeeStatus::Pending => self.pending,
            ApogeeStatus::Ready => self.ready,
            ApogeeStatus::Expired => self.expired,
        }
    }
}

/// Collection totals. Money is in integer cents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionSummary {
    /// Records in the snapshot.
    pub entries: usize,
    /// Units on hand across all records.
    pub total_bottles: i64,
    /// Σ price × quantity, in cents. Unpriced records contribute nothing.
    pub total_value_cents: i64,
    /// `total_value_cents / total_bottles`; `None` with no bottles on hand.
    pub average_price_cents: Option<i64>,
    pub by_status: StatusBreakdown,
}

impl CollectionSummary {
    pub fn compute(items: &[InventoryItem], today: NaiveDate, classifier: &ApogeeClassifier) -> Self {
        let mut summary = CollectionSummary {
            entries: items.len(),
            ..CollectionSummary::default()
        };

        for item in items {
            let quantity = item.quantity_on_hand();
            summary.total_bottles = summary.total_bottles.saturating_add(quantity);
            summary.total_value_cents = summary
                .total_value_cents
                .saturating_add(price_cents(item.price()).saturating_mul(quantity));
            summary.by_status.add(classifier.status(item, today), quantity);
        }

        summary.average_price_cents = (summary.total_bottles > 0)
            .then(|| summary.total_value_cents / summary.total_bottles);

        tracing::debug!(
            entries = summary.entries,
            bottles = summary.total_bottles,
            value_cents = summary.total_value_cents,
            "computed collection summary"
        );
        summary
    }
}

fn price_cents(price: Option<f64>) -> i64 {
    match price {
        Some(p) if p.is_finite() => (p * 100.0).round() as i64,
        _ => 0,
    }
}
