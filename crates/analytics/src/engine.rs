//! Grouping engine: reduce a sequence of records into labelled count buckets.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use glou_core::ValueObject;

/// A named accumulator produced by one aggregation call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AggregationBucket {
    pub label: String,
    pub count: i64,
}

impl ValueObject for AggregationBucket {}

impl AggregationBucket {
    pub fn new(label: impl Into<String>, count: i64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Output ordering of [`aggregate_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketOrder {
    /// Order in which each label was first produced.
    #[default]
    FirstSeen,
    /// Largest count first; equal counts keep first-seen order.
    CountDescending,
}

/// Group `items` by `key_fn`, summing `weight_fn` per group.
///
/// - `key_fn` returning `None` drops the item from this aggregation.
/// - Weights are summed as given (negative weights are not clamped).
/// - Sums are exact; only a final total outside `i64` saturates.
/// - Buckets whose total is zero are omitted.
///
/// Deterministic: identical inputs give identical bucket sequences.
pub fn aggregate_by_key<'a, T, I, K, W>(
    items: I,
    key_fn: K,
    weight_fn: W,
    order: BucketOrder,
) -> Vec<AggregationBucket>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    K: Fn(&T) -> Option<String>,
    W: Fn(&T) -> i64,
{
    let mut sums: Vec<(String, i128)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut seen = 0usize;

    for item in items {
        seen += 1;
        let Some(label) = key_fn(item) else {
            continue;
        };
        let weight = i128::from(weight_fn(item));

        match index.get(&label) {
            Some(&slot) => sums[slot].1 += weight,
            None => {
                index.insert(label.clone(), sums.len());
                sums.push((label, weight));
            }
        }
    }

    let mut buckets: Vec<AggregationBucket> = sums
        .into_iter()
        .filter(|(_, sum)| *sum != 0)
        .map(|(label, sum)| AggregationBucket::new(label, clamp_to_i64(sum)))
        .collect();

    if order == BucketOrder::CountDescending {
        // stable: ties stay in first-seen order
        buckets.sort_by(|a, b| b.count.cmp(&a.count));
    }

    tracing::debug!(items = seen, buckets = buckets.len(), ?order, "aggregated inventory");
    buckets
}

/// Sum of all bucket counts (the denominator for percentage displays).
pub fn total(buckets: &[AggregationBucket]) -> i64 {
    clamp_to_i64(buckets.iter().map(|b| i128::from(b.count)).sum())
}

// An i128 sum of i64 weights only overflows past 2^64 items.
fn clamp_to_i64(sum: i128) -> i64 {
    i64::try_from(sum).unwrap_or(if sum < 0 { i64::MIN } else { i64::MAX })
}

/// The first `n` buckets, for "top regions" style views.
pub fn top(mut buckets: Vec<AggregationBucket>, n: usize) -> Vec<AggregationBucket> {
    buckets.truncate(n);
    buckets
}
