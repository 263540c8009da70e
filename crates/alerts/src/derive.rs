use chrono::NaiveDate;

use glou_cellar::{ApogeeClassifier, ApogeeStatus, InventoryItem};

/// Anything at or below this many units is flagged as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 1;

/// Items whose drinking window contains `today`, in input order.
///
/// The window is the item's explicit apogee dates or, when it has none, the
/// default window for its vintage and type.
pub fn ready_to_drink<'a>(
    items: &'a [InventoryItem],
    today: NaiveDate,
    classifier: &ApogeeClassifier,
) -> Vec<&'a InventoryItem> {
    let ready: Vec<_> = items
        .iter()
        .filter(|item| classifier.status(item, today) == ApogeeStatus::Ready)
        .collect();
    tracing::debug!(items = items.len(), ready = ready.len(), %today, "derived ready-to-drink");
    ready
}

/// Items with `quantity_on_hand <= threshold`, in input order.
pub fn low_stock(items: &[InventoryItem], threshold: i64) -> Vec<&InventoryItem> {
    let low: Vec<_> = items
        .iter()
        .filter(|item| item.quantity_on_hand() <= threshold)
        .collect();
    tracing::debug!(items = items.len(), low = low.len(), threshold, "derived low stock");
    low
}
