use chrono::DateTime;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::models::{TransactionRecord, TransactionTable};

const WALLET_FIELDS: &[&str] = &["userWallet", "wallet"];
const AMOUNT_FIELDS: &[&str] = &["actionData.amount", "amount"];
const ASSET_FIELDS: &[&str] = &["actionData.assetSymbol", "assetSymbol"];
const ACTION_FIELD: &str = "action";
const TIMESTAMP_FIELD: &str = "timestamp";

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("input is not a JSON array of transaction records: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("record {index} is missing the wallet identifier field")]
    MissingWallet { index: usize },
}

/// Load the raw transaction ledger from a JSON file and normalize it.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<TransactionTable, DataLoadError> {
    let path = path.as_ref();
    info!("Loading transaction data from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| DataLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let table = parse_transactions(&content)?;
    info!(
        "Loaded {} transactions for {} unique wallets",
        table.len(),
        table.unique_wallet_count()
    );
    Ok(table)
}

/// Parse an in-memory JSON document into a normalized table.
///
/// Nested objects are flattened into dotted columns (`actionData.amount`),
/// matching the shape of the upstream feed. A record without a wallet
/// identifier fails the whole load; a bad amount or timestamp only leaves
/// that field missing for its row.
pub fn parse_transactions(content: &str) -> Result<TransactionTable, DataLoadError> {
    let raw: Vec<Value> = serde_json::from_str(content)?;

    let mut records = Vec::with_capacity(raw.len());
    for (index, entry) in raw.into_iter().enumerate() {
        let obj = match entry {
            Value::Object(map) => map,
            _ => return Err(DataLoadError::NotAnObject { index }),
        };

        let mut columns = HashMap::new();
        flatten_into("", &Value::Object(obj), &mut columns);

        let wallet = WALLET_FIELDS
            .iter()
            .find_map(|f| columns.get(*f).and_then(string_value))
            .ok_or(DataLoadError::MissingWallet { index })?;

        records.push(TransactionRecord {
            wallet,
            action: columns.get(ACTION_FIELD).and_then(string_value),
            timestamp: columns.get(TIMESTAMP_FIELD).and_then(epoch_seconds),
            amount: AMOUNT_FIELDS
                .iter()
                .find_map(|f| columns.get(*f).and_then(numeric_value)),
            asset_symbol: ASSET_FIELDS
                .iter()
                .find_map(|f| columns.get(*f).and_then(string_value)),
        });
    }

    Ok(TransactionTable::new(records))
}

/// Flatten nested objects into dotted keys; everything else stays as-is.
fn flatten_into(prefix: &str, value: &Value, out: &mut HashMap<String, Value>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let column = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_into(&column, nested, out);
            }
        }
        _ => {
            out.insert(prefix.to_string(), value.clone());
        }
    }
}

fn string_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Coerce a JSON value to f64; unparseable values become missing.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Parse an epoch-seconds value (number or numeric string) into UTC time.
fn epoch_seconds(value: &Value) -> Option<chrono::DateTime<chrono::Utc>> {
    let secs = numeric_value(value)?;
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp(secs as i64, 0)
}
