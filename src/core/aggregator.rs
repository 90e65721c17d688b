use std::collections::HashMap;
use tracing::debug;

use crate::core::features;
use crate::core::scoring::CreditScorer;
use crate::models::{ScoreRecord, TransactionTable};

/// Drives the feature extractor and scoring engine over every distinct
/// wallet in a table, memoizing per-wallet scores within a run.
pub struct ScoreAggregator {
    scorer: CreditScorer,
    cache: HashMap<String, f64>,
}

impl ScoreAggregator {
    pub fn new(scorer: CreditScorer) -> Self {
        Self {
            scorer,
            cache: HashMap::new(),
        }
    }

    /// Score every distinct wallet in first-appearance order.
    pub fn score_all(&mut self, table: &TransactionTable) -> Vec<ScoreRecord> {
        let wallets = table.wallets_in_order();
        debug!("Calculating scores for {} wallets", wallets.len());

        wallets
            .into_iter()
            .map(|wallet| ScoreRecord {
                wallet: wallet.to_string(),
                credit_score: self.score_wallet(table, wallet),
            })
            .collect()
    }

    /// Lookup-or-compute: the cache is always consulted first. A wallet
    /// with no rows scores the policy minimum directly, bypassing the
    /// engine's base-score path.
    pub fn score_wallet(&mut self, table: &TransactionTable, wallet: &str) -> f64 {
        if let Some(&score) = self.cache.get(wallet) {
            return score;
        }

        let score = match features::extract(table, wallet) {
            Some(record) => self.scorer.score(&record),
            None => self.scorer.policy().min_score,
        };

        self.cache.insert(wallet.to_string(), score);
        score
    }

    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }
}
