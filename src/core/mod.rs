pub mod aggregator;
pub mod features;
pub mod scoring;

pub use aggregator::ScoreAggregator;
pub use scoring::CreditScorer;
