use serde::{Deserialize, Serialize};

const BASE_SCORE: f64 = 500.0;
const MAX_SCORE: f64 = 1000.0;
const MIN_SCORE: f64 = 0.0;
const ACTIVITY_MAX_POINTS: f64 = 200.0;
const ACTIVITY_POINTS_PER_TX: f64 = 0.5;
const LONGEVITY_MAX_POINTS: f64 = 100.0;
const LONGEVITY_POINTS_PER_DAY: f64 = 2.0;
const DIVERSITY_MAX_POINTS: f64 = 100.0;
const DIVERSITY_POINTS_PER_ASSET: f64 = 20.0;
const DEPOSIT_BONUS: f64 = 50.0;
const DEPOSIT_RATIO_THRESHOLD: f64 = 0.5;
const LIQUIDATION_PENALTY: f64 = 100.0;

/// Scoring policy: every weight, cap, and threshold of the credit formula
/// as an explicit field, so the policy is swappable without touching the
/// extraction or aggregation logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub base_score: f64,
    pub max_score: f64,
    pub min_score: f64,

    // Activity: points per transaction, saturating
    pub activity_points_per_tx: f64,
    pub activity_max_points: f64,

    // Longevity: points per active day, saturating
    pub longevity_points_per_day: f64,
    pub longevity_max_points: f64,

    // Diversity: points per distinct asset, saturating
    pub diversity_points_per_asset: f64,
    pub diversity_max_points: f64,

    // Behavior adjustments. The action labels are case-sensitive external
    // contracts from the upstream data feed.
    pub deposit_action: String,
    pub deposit_ratio_threshold: f64,
    pub deposit_bonus: f64,
    pub liquidation_action: String,
    pub liquidation_penalty: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        ScoringPolicy {
            base_score: BASE_SCORE,
            max_score: MAX_SCORE,
            min_score: MIN_SCORE,
            activity_points_per_tx: ACTIVITY_POINTS_PER_TX,
            activity_max_points: ACTIVITY_MAX_POINTS,
            longevity_points_per_day: LONGEVITY_POINTS_PER_DAY,
            longevity_max_points: LONGEVITY_MAX_POINTS,
            diversity_points_per_asset: DIVERSITY_POINTS_PER_ASSET,
            diversity_max_points: DIVERSITY_MAX_POINTS,
            deposit_action: "deposit".to_string(),
            deposit_ratio_threshold: DEPOSIT_RATIO_THRESHOLD,
            deposit_bonus: DEPOSIT_BONUS,
            liquidation_action: "liquidationcall".to_string(),
            liquidation_penalty: LIQUIDATION_PENALTY,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    // Output
    pub output_dir: String,
    pub scores_file: String,
    pub analysis_file: String,

    // Logging
    pub log_level: String,

    // Scoring policy
    pub policy: ScoringPolicy,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let env = |key: &str, default: &str| -> String {
            std::env::var(key).unwrap_or_else(|_| default.to_string())
        };

        Config {
            output_dir: env("OUTPUT_DIR", "results"),
            scores_file: env("SCORES_FILE", "wallet_scores.csv"),
            analysis_file: env("ANALYSIS_FILE", "analysis.md"),
            log_level: env("LOG_LEVEL", "info"),
            policy: ScoringPolicy::default(),
        }
    }
}
