use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::models::{
    ActionStats, AmountFeatures, FeatureRecord, TimeFeatures, TransactionRecord, TransactionTable,
};

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Extract the full feature record for one wallet.
///
/// Returns `None` when the wallet has no rows in the table — the caller
/// treats that as an unscoreable wallet, not an error. Feature families
/// whose preconditions are unmet are simply absent from the record.
pub fn extract(table: &TransactionTable, wallet: &str) -> Option<FeatureRecord> {
    let txs = table.for_wallet(wallet);
    if txs.is_empty() {
        return None;
    }

    let total = txs.len();

    let unique_assets = txs
        .iter()
        .filter_map(|t| t.asset_symbol.as_deref())
        .collect::<HashSet<_>>()
        .len();

    let (actions, unique_actions) = action_features(&txs, total);

    Some(FeatureRecord {
        total_transactions: total,
        unique_assets,
        unique_actions,
        time: table.has_timestamps().then(|| time_features(&txs)),
        action_diversity: unique_actions as f64 / total as f64,
        actions,
        amounts: amount_features(&txs),
    })
}

/// Time metrics over the wallet's timestamped rows, sorted ascending.
fn time_features(txs: &[&TransactionRecord]) -> TimeFeatures {
    let mut stamps: Vec<DateTime<Utc>> = txs.iter().filter_map(|t| t.timestamp).collect();
    stamps.sort_unstable();

    let gaps: Vec<f64> = stamps
        .windows(2)
        .map(|w| (w[1] - w[0]).num_seconds() as f64)
        .collect();

    let tx_frequency_hrs = if gaps.is_empty() {
        0.0
    } else {
        gaps.iter().sum::<f64>() / gaps.len() as f64 / SECONDS_PER_HOUR
    };

    // Whole-day span between first and last transaction
    let span_days = match (stamps.first(), stamps.last()) {
        (Some(first), Some(last)) => (*last - *first).num_days(),
        _ => 0,
    };

    TimeFeatures {
        tx_frequency_hrs,
        active_days: span_days.max(1),
        tx_per_day: txs.len() as f64 / span_days.max(1) as f64,
    }
}

fn action_features(
    txs: &[&TransactionRecord],
    total: usize,
) -> (HashMap<String, ActionStats>, usize) {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for t in txs {
        if let Some(action) = t.action.as_deref() {
            *counts.entry(action.to_string()).or_default() += 1;
        }
    }

    let unique_actions = counts.len();
    let actions = counts
        .into_iter()
        .map(|(action, count)| {
            (
                action,
                ActionStats {
                    count,
                    ratio: count as f64 / total as f64,
                },
            )
        })
        .collect();

    (actions, unique_actions)
}

/// Amount statistics over rows with a parseable amount; `None` when every
/// amount is missing.
fn amount_features(txs: &[&TransactionRecord]) -> Option<AmountFeatures> {
    let amounts: Vec<f64> = txs.iter().filter_map(|t| t.amount).collect();
    if amounts.is_empty() {
        return None;
    }

    let n = amounts.len() as f64;
    let total_amount: f64 = amounts.iter().sum();
    let avg_amount = total_amount / n;
    let max_amount = amounts.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    // Sample standard deviation; undefined for one value, reported as 0
    let amount_std = if amounts.len() > 1 {
        let variance = amounts
            .iter()
            .map(|a| (a - avg_amount).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    Some(AmountFeatures {
        total_amount,
        avg_amount,
        max_amount,
        amount_std,
    })
}
