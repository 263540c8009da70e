//! Derived alert views: what is ready to drink, what is running out.
//!
//! These are transient candidates computed from a snapshot. Persisted alert rows
//! (created, dismissed) belong to the backend; this crate never mutates them and
//! does not reconcile against them.

pub mod candidate;
pub mod derive;

pub use candidate::{AlertCandidate, AlertKind, derive_candidates};
pub use derive::{DEFAULT_LOW_STOCK_THRESHOLD, low_stock, ready_to_drink};
