use serde::{Deserialize, Serialize};

/// One scored wallet. `credit_score` is always within [0, 1000].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub wallet: String,
    pub credit_score: f64,
}
