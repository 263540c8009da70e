//! Drinking-window value type and the classification of a date against it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glou_core::{DomainError, DomainResult, ValueObject};

/// Optional `[start, end]` calendar interval (both bounds inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl ValueObject for DateWindow {}

impl DateWindow {
    /// Window with neither bound; always classifies as `Unknown`.
    pub const EMPTY: DateWindow = DateWindow {
        start: None,
        end: None,
    };

    /// Build a window as given. A `start` after `end` is accepted.
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Build a window, rejecting a start that falls after the end.
    pub fn try_new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> DomainResult<Self> {
        let window = Self::new(start, end);
        if !window.is_well_formed() {
            return Err(DomainError::invariant(format!(
                "apogee window starts after it ends ({start:?} > {end:?})"
            )));
        }
        Ok(window)
    }

    /// Both bounds present.
    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// False only when both bounds are present and `start > end`.
    pub fn is_well_formed(&self) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

/// Where a date falls relative to a drinking window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApogeeStatus {
    /// The window is missing a bound.
    Unknown,
    /// Still ageing: the window has not opened yet.
    Pending,
    /// Inside the window.
    Ready,
    /// Past the window.
    Expired,
}

impl ApogeeStatus {
    pub const ALL: [ApogeeStatus; 4] = [
        ApogeeStatus::Unknown,
        ApogeeStatus::Pending,
        ApogeeStatus::Ready,
        ApogeeStatus::Expired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApogeeStatus::Unknown => "unknown",
            ApogeeStatus::Pending => "pending",
            ApogeeStatus::Ready => "ready",
            ApogeeStatus::Expired => "expired",
        }
    }
}

impl core::fmt::Display for ApogeeStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify `today` against `window`.
///
/// Rules, in order: a missing bound is `Unknown`; before `start` is `Pending`;
/// after `end` is `Expired`; anything else is `Ready`.
///
/// Malformed windows (`start > end`) go through the same rules literally: a date
/// before `start` reads `Pending` and a date after `end` reads `Expired`, even when
/// it is both. Callers that need a stricter reading use
/// [`crate::ApogeeClassifier`] with [`crate::MalformedWindowPolicy::Unknown`].
pub fn classify(window: &DateWindow, today: NaiveDate) -> ApogeeStatus {
    let (Some(start), Some(end)) = (window.start, window.end) else {
        return ApogeeStatus::Unknown;
    };

    if today < start {
        ApogeeStatus::Pending
    } else if today > end {
        ApogeeStatus::Expired
    } else {
        ApogeeStatus::Ready
    }
}
