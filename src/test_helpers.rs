use chrono::{DateTime, Duration, Utc};

use crate::models::{TransactionRecord, TransactionTable};

fn base_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// One transaction at `minute_offset` minutes past the fixed base time.
pub fn tx(
    wallet: &str,
    action: &str,
    amount: Option<f64>,
    minute_offset: i64,
) -> TransactionRecord {
    TransactionRecord {
        wallet: wallet.to_string(),
        action: Some(action.to_string()),
        timestamp: Some(base_time() + Duration::minutes(minute_offset)),
        amount,
        asset_symbol: None,
    }
}

/// One transaction at `day_offset` whole days past the fixed base time.
pub fn tx_at_day(
    wallet: &str,
    action: &str,
    amount: Option<f64>,
    day_offset: i64,
) -> TransactionRecord {
    TransactionRecord {
        timestamp: Some(base_time() + Duration::days(day_offset)),
        ..tx(wallet, action, amount, 0)
    }
}

pub fn tx_with_asset(
    wallet: &str,
    action: &str,
    amount: Option<f64>,
    minute_offset: i64,
    asset: &str,
) -> TransactionRecord {
    TransactionRecord {
        asset_symbol: Some(asset.to_string()),
        ..tx(wallet, action, amount, minute_offset)
    }
}

pub fn make_table(records: Vec<TransactionRecord>) -> TransactionTable {
    TransactionTable::new(records)
}
