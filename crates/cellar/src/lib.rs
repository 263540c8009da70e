//! Cellar domain module: inventory records and drinking-window classification.
//!
//! Everything here is deterministic domain logic over snapshots already fetched
//! from the inventory API (no IO, no HTTP, no storage). `today` is always an
//! explicit argument; nothing reads the clock.

pub mod apogee;
pub mod item;
pub mod record;
pub mod window;

pub use apogee::{
    ApogeeClassifier, ApogeePolicy, MalformedWindowPolicy, WindowOffsets, default_window_for,
};
pub use item::{BeverageType, InventoryItem, ItemKind};
pub use record::{BottleRecord, InventorySnapshot, SnapshotError, TobaccoRecord};
pub use window::{ApogeeStatus, DateWindow, classify};
