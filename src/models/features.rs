use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Time-based metrics. Emitted only when the source data has a timestamp
/// column; absent entirely otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Average hours between successive transactions (0 with fewer than 2).
    pub tx_frequency_hrs: f64,
    /// Whole days between first and last transaction, floored at 1.
    pub active_days: i64,
    /// Transactions per day over the active span.
    pub tx_per_day: f64,
}

/// Count and share of one action type within a wallet's history.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActionStats {
    pub count: usize,
    pub ratio: f64,
}

/// Amount statistics over the rows with a parseable amount. Absent when
/// no such row exists for the wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmountFeatures {
    pub total_amount: f64,
    pub avg_amount: f64,
    pub max_amount: f64,
    /// Sample standard deviation; 0 for a single amount, never NaN.
    pub amount_std: f64,
}

/// Fixed-shape feature record for one wallet.
///
/// Feature families with unmet preconditions are `None` / empty rather
/// than zero-filled, so sparse wallets still carry a valid record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub total_transactions: usize,
    pub unique_assets: usize,
    pub unique_actions: usize,
    pub time: Option<TimeFeatures>,
    pub actions: HashMap<String, ActionStats>,
    pub action_diversity: f64,
    pub amounts: Option<AmountFeatures>,
}

impl FeatureRecord {
    pub fn action_count(&self, action: &str) -> usize {
        self.actions.get(action).map(|s| s.count).unwrap_or(0)
    }

    pub fn action_ratio(&self, action: &str) -> f64 {
        self.actions.get(action).map(|s| s.ratio).unwrap_or(0.0)
    }

    pub fn active_days(&self) -> i64 {
        self.time.as_ref().map(|t| t.active_days).unwrap_or(0)
    }
}
