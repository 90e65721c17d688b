mod common;

use serde_json::json;

use aave_credit_scorer::core::{CreditScorer, ScoreAggregator};
use aave_credit_scorer::loader;
use aave_credit_scorer::report;

use common::{raw_entry, to_json, BASE_EPOCH, SECONDS_PER_DAY};

#[test]
fn deposit_majority_wallet_scores_as_expected() {
    // One wallet, 3 deposits (100, 200, 300) spanning 10 days, one asset,
    // no liquidation:
    //   base 500 + activity 1.5 + longevity 20 + diversity 20 + bonus 50
    let entries = vec![
        raw_entry("0xaaa", "deposit", "100", "USDC", BASE_EPOCH),
        raw_entry("0xaaa", "deposit", "200", "USDC", BASE_EPOCH + 5 * SECONDS_PER_DAY),
        raw_entry("0xaaa", "deposit", "300", "USDC", BASE_EPOCH + 10 * SECONDS_PER_DAY),
    ];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let scores = aggregator.score_all(&table);

    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].wallet, "0xaaa");
    assert!((scores[0].credit_score - 591.5).abs() < 1e-9);
}

#[test]
fn liquidated_wallet_takes_the_penalty() {
    // One liquidationcall and nothing else:
    //   base 500 + activity 0.5 + longevity 2 (single-day floor)
    //   + diversity 20 (one asset) - penalty 100
    let entries = vec![raw_entry("0xbbb", "liquidationcall", "50", "WETH", BASE_EPOCH)];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let scores = aggregator.score_all(&table);

    assert!((scores[0].credit_score - 422.5).abs() < 1e-9);
    assert!(scores[0].credit_score >= 0.0);
}

#[test]
fn liquidated_wallet_without_timestamps_or_assets() {
    // No timestamp column and no asset: longevity and diversity are 0.
    //   base 500 + activity 0.5 - penalty 100 = 400.5
    let entries = vec![json!({"userWallet": "0xccc", "action": "liquidationcall"})];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let scores = aggregator.score_all(&table);

    assert!((scores[0].credit_score - 400.5).abs() < 1e-9);
}

#[test]
fn output_rows_match_distinct_wallets_in_first_appearance_order() {
    let entries = vec![
        raw_entry("0xb", "deposit", "10", "USDC", BASE_EPOCH),
        raw_entry("0xa", "borrow", "20", "DAI", BASE_EPOCH + 60),
        raw_entry("0xb", "repay", "10", "USDC", BASE_EPOCH + 120),
        raw_entry("0xc", "redeemunderlying", "5", "WETH", BASE_EPOCH + 180),
        raw_entry("0xa", "deposit", "15", "DAI", BASE_EPOCH + 240),
    ];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let scores = aggregator.score_all(&table);

    let wallets: Vec<&str> = scores.iter().map(|s| s.wallet.as_str()).collect();
    assert_eq!(wallets, vec!["0xb", "0xa", "0xc"]);
    assert_eq!(scores.len(), table.unique_wallet_count());

    // Every score stays inside the fixed range
    for s in &scores {
        assert!((0.0..=1000.0).contains(&s.credit_score));
    }
}

#[test]
fn scoring_twice_yields_identical_results() {
    let entries = vec![
        raw_entry("0xa", "deposit", "100", "USDC", BASE_EPOCH),
        raw_entry("0xa", "borrow", "50", "DAI", BASE_EPOCH + SECONDS_PER_DAY),
        raw_entry("0xb", "liquidationcall", "10", "WETH", BASE_EPOCH),
    ];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let first = aggregator.score_all(&table);
    let second = aggregator.score_all(&table);

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.wallet, b.wallet);
        assert!((a.credit_score - b.credit_score).abs() < 1e-9);
    }
}

#[test]
fn bad_amounts_degrade_without_failing_the_run() {
    let entries = vec![
        json!({
            "userWallet": "0xa",
            "action": "deposit",
            "timestamp": BASE_EPOCH,
            "actionData": {"amount": "garbage", "assetSymbol": "USDC"}
        }),
        raw_entry("0xa", "deposit", "100", "USDC", BASE_EPOCH + 60),
    ];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();
    assert_eq!(table.len(), 2);

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let scores = aggregator.score_all(&table);
    assert_eq!(scores.len(), 1);
    assert!(scores[0].credit_score > 0.0);
}

#[test]
fn malformed_input_aborts_before_scoring() {
    assert!(loader::parse_transactions("not json at all").is_err());
    assert!(loader::parse_transactions(r#"{"single": "object"}"#).is_err());
    assert!(loader::parse_transactions(r#"[{"action": "deposit"}]"#).is_err());
}

#[test]
fn full_pipeline_to_csv_and_analysis() {
    let entries = vec![
        raw_entry("0xaaa", "deposit", "100", "USDC", BASE_EPOCH),
        raw_entry("0xaaa", "deposit", "200", "USDC", BASE_EPOCH + 5 * SECONDS_PER_DAY),
        raw_entry("0xaaa", "deposit", "300", "USDC", BASE_EPOCH + 10 * SECONDS_PER_DAY),
        raw_entry("0xbbb", "liquidationcall", "50", "WETH", BASE_EPOCH),
    ];
    let table = loader::parse_transactions(&to_json(&entries)).unwrap();

    let mut aggregator = ScoreAggregator::new(CreditScorer::default());
    let scores = aggregator.score_all(&table);

    let dir = std::env::temp_dir().join(format!("credit_pipeline_{}", std::process::id()));
    let csv_path = dir.join("wallet_scores.csv");
    let analysis_path = dir.join("analysis.md");

    report::write_scores_csv(&csv_path, &scores).unwrap();
    report::write_analysis(&analysis_path, &scores).unwrap();

    let loaded = report::load_scores_csv(&csv_path).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].wallet, "0xaaa");
    assert!((loaded[0].credit_score - 591.5).abs() < 1e-9);
    assert!((loaded[1].credit_score - 422.5).abs() < 1e-9);

    let analysis = std::fs::read_to_string(&analysis_path).unwrap();
    assert!(analysis.contains("# Credit Score Analysis"));
    assert!(analysis.contains("Good (500-700)"));
    assert!(analysis.contains("Fair (300-500)"));

    std::fs::remove_dir_all(&dir).ok();
}
