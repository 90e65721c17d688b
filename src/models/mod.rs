pub mod features;
pub mod score;
pub mod transaction;

pub use features::{ActionStats, AmountFeatures, FeatureRecord, TimeFeatures};
pub use score::ScoreRecord;
pub use transaction::{TransactionRecord, TransactionTable};
