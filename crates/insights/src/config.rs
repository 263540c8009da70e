//! Runtime configuration for report building.

use anyhow::{Context, bail};
use serde::Deserialize;

use glou_alerts::DEFAULT_LOW_STOCK_THRESHOLD;
use glou_cellar::{ApogeeClassifier, ApogeePolicy, MalformedWindowPolicy};

pub const LOW_STOCK_THRESHOLD_ENV: &str = "GLOU_LOW_STOCK_THRESHOLD";
pub const TOP_REGIONS_ENV: &str = "GLOU_TOP_REGIONS";
pub const MALFORMED_WINDOWS_ENV: &str = "GLOU_MALFORMED_WINDOWS";

pub const DEFAULT_TOP_REGIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Items at or below this quantity are low stock.
    pub low_stock_threshold: i64,
    /// How many regions the "top regions" chart keeps.
    pub top_regions: usize,
    /// Default-window offsets and malformed-window policy.
    pub apogee: ApogeePolicy,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            top_regions: DEFAULT_TOP_REGIONS,
            apogee: ApogeePolicy::default(),
        }
    }
}

impl InsightsConfig {
    /// Read overrides from the process environment.
    ///
    /// Unset variables keep their defaults; set-but-invalid values are errors.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        match lookup(LOW_STOCK_THRESHOLD_ENV) {
            Some(raw) => {
                config.low_stock_threshold = raw.trim().parse().with_context(|| {
                    format!("{LOW_STOCK_THRESHOLD_ENV} must be an integer, got {raw:?}")
                })?;
            }
            None => tracing::debug!(
                default = config.low_stock_threshold,
                "{LOW_STOCK_THRESHOLD_ENV} not set; using default"
            ),
        }

        match lookup(TOP_REGIONS_ENV) {
            Some(raw) => {
                config.top_regions = raw.trim().parse().with_context(|| {
                    format!("{TOP_REGIONS_ENV} must be a non-negative integer, got {raw:?}")
                })?;
            }
            None => tracing::debug!(
                default = config.top_regions,
                "{TOP_REGIONS_ENV} not set; using default"
            ),
        }

        if let Some(raw) = lookup(MALFORMED_WINDOWS_ENV) {
            config.apogee.malformed = parse_malformed_policy(&raw)?;
        }

        tracing::info!(
            low_stock_threshold = config.low_stock_threshold,
            top_regions = config.top_regions,
            malformed_windows = ?config.apogee.malformed,
            "insights configuration loaded"
        );
        Ok(config)
    }

    pub fn classifier(&self) -> ApogeeClassifier {
        ApogeeClassifier::new(self.apogee.clone())
    }
}

fn parse_malformed_policy(raw: &str) -> anyhow::Result<MalformedWindowPolicy> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "literal" => Ok(MalformedWindowPolicy::Literal),
        "unknown" => Ok(MalformedWindowPolicy::Unknown),
        other => bail!("{MALFORMED_WINDOWS_ENV} must be `literal` or `unknown`, got {other:?}"),
    }
}
