use serde_json::{json, Value};

pub const BASE_EPOCH: i64 = 1629158400; // 2021-08-17T00:00:00Z
pub const SECONDS_PER_DAY: i64 = 86400;

/// One raw feed entry in the upstream shape: wallet + action at top level,
/// amount and asset nested under `actionData`.
pub fn raw_entry(wallet: &str, action: &str, amount: &str, asset: &str, epoch: i64) -> Value {
    json!({
        "userWallet": wallet,
        "action": action,
        "timestamp": epoch,
        "actionData": {
            "amount": amount,
            "assetSymbol": asset,
        }
    })
}

pub fn to_json(entries: &[Value]) -> String {
    serde_json::to_string(entries).unwrap()
}
