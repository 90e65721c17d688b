use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ledger entry from the lending protocol feed.
///
/// Optional fields stay `None` when the upstream record omits them or the
/// value cannot be coerced; rows are never dropped for a bad field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub wallet: String,
    pub action: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub amount: Option<f64>,
    pub asset_symbol: Option<String>,
}

/// Wraps Vec<TransactionRecord> with helper methods replacing DataFrame
/// operations. Built once by the loader, never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TransactionTable {
    records: Vec<TransactionRecord>,
    has_timestamps: bool,
}

impl TransactionTable {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        let has_timestamps = records.iter().any(|r| r.timestamp.is_some());
        Self {
            records,
            has_timestamps,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether the source data carried a timestamp column at all.
    pub fn has_timestamps(&self) -> bool {
        self.has_timestamps
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TransactionRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[TransactionRecord] {
        &self.records
    }

    /// All rows for one wallet, exact case-sensitive match, source order.
    pub fn for_wallet(&self, wallet: &str) -> Vec<&TransactionRecord> {
        self.records.iter().filter(|r| r.wallet == wallet).collect()
    }

    /// Distinct wallets in first-appearance order.
    pub fn wallets_in_order(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut wallets = Vec::new();
        for r in &self.records {
            if seen.insert(r.wallet.as_str()) {
                wallets.push(r.wallet.as_str());
            }
        }
        wallets
    }

    pub fn unique_wallet_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.wallet.as_str())
            .collect::<std::collections::HashSet<_>>()
            .len()
    }
}

impl std::ops::Index<usize> for TransactionTable {
    type Output = TransactionRecord;
    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a TransactionRecord;
    type IntoIter = std::slice::Iter<'a, TransactionRecord>;
    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
