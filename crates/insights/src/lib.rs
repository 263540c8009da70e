//! `glou-insights` — everything a dashboard screen needs, from one snapshot.
//!
//! Screens stay thin: they fetch the inventory, pass it here with today's date,
//! and render the [`DashboardReport`]. Locale, colors and percentages are theirs.

pub mod config;
pub mod report;

pub use config::InsightsConfig;
pub use report::DashboardReport;
