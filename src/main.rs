use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use aave_credit_scorer::config::Config;
use aave_credit_scorer::core::{CreditScorer, ScoreAggregator};
use aave_credit_scorer::loader;
use aave_credit_scorer::report;

fn main() -> Result<()> {
    let cfg = Config::from_env();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let input = match args.get(1) {
        Some(path) => path.clone(),
        None => bail!("usage: aave-credit-scorer <input.json> [output_dir]"),
    };
    let output_dir = args.get(2).cloned().unwrap_or_else(|| cfg.output_dir.clone());

    let scores_path = Path::new(&output_dir).join(&cfg.scores_file);
    let analysis_path = Path::new(&output_dir).join(&cfg.analysis_file);

    info!("Starting credit scoring pipeline");

    // 1. Load and normalize the transaction ledger
    let table = loader::load_transactions(&input)?;

    // 2. Score every wallet
    let scorer = CreditScorer::new(cfg.policy.clone());
    let mut aggregator = ScoreAggregator::new(scorer);
    let scores = aggregator.score_all(&table);

    // 3. Write results and analysis
    report::write_scores_csv(&scores_path, &scores)?;
    report::write_analysis(&analysis_path, &scores)?;

    // 4. Console summary
    let summary = report::ScoreSummary::from_scores(&scores);
    summary.print_summary();
    report::print_range_table(&report::bucket_counts(&scores));

    info!("Pipeline completed; results in {}", output_dir);
    Ok(())
}
