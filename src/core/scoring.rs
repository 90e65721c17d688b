use crate::config::ScoringPolicy;
use crate::models::FeatureRecord;

/// Pure scoring engine: maps a feature record to a credit score inside
/// `[policy.min_score, policy.max_score]` via additive capped components.
#[derive(Debug, Clone)]
pub struct CreditScorer {
    policy: ScoringPolicy,
}

impl CreditScorer {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Total over every possible feature record; only the final sum is
    /// clamped, never the individual components.
    pub fn score(&self, features: &FeatureRecord) -> f64 {
        let score = self.policy.base_score
            + self.activity_score(features)
            + self.longevity_score(features)
            + self.diversity_score(features)
            + self.behavior_adjustment(features);

        score.clamp(self.policy.min_score, self.policy.max_score)
    }

    /// Rewards raw transaction count, saturating at the activity cap.
    fn activity_score(&self, features: &FeatureRecord) -> f64 {
        (features.total_transactions as f64 * self.policy.activity_points_per_tx)
            .min(self.policy.activity_max_points)
    }

    /// Rewards long-term participation; absent time features score 0.
    fn longevity_score(&self, features: &FeatureRecord) -> f64 {
        (features.active_days() as f64 * self.policy.longevity_points_per_day)
            .min(self.policy.longevity_max_points)
    }

    /// Rewards holding distinct assets, saturating at the diversity cap.
    fn diversity_score(&self, features: &FeatureRecord) -> f64 {
        (features.unique_assets as f64 * self.policy.diversity_points_per_asset)
            .min(self.policy.diversity_max_points)
    }

    /// Deposit-majority bonus and liquidation penalty. The deposit ratio
    /// must strictly exceed the threshold; a single liquidation event is
    /// enough for the full penalty.
    fn behavior_adjustment(&self, features: &FeatureRecord) -> f64 {
        let mut adjustment = 0.0;

        if features.action_ratio(&self.policy.deposit_action) > self.policy.deposit_ratio_threshold
        {
            adjustment += self.policy.deposit_bonus;
        }

        if features.action_count(&self.policy.liquidation_action) > 0 {
            adjustment -= self.policy.liquidation_penalty;
        }

        adjustment
    }
}

impl Default for CreditScorer {
    fn default() -> Self {
        Self::new(ScoringPolicy::default())
    }
}
