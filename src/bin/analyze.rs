use anyhow::{bail, Result};
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use aave_credit_scorer::config::Config;
use aave_credit_scorer::report;

fn main() -> Result<()> {
    let cfg = Config::from_env();

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
        None => bail!("usage: analyze <scores.csv> [output_dir]"),
    };
    let output_dir = args.get(2).cloned().unwrap_or_else(|| cfg.output_dir.clone());

    let scores = report::load_scores_csv(&input)?;

    let summary = report::ScoreSummary::from_scores(&scores);
    summary.print_summary();
    report::print_range_table(&report::bucket_counts(&scores));

    let analysis_path = Path::new(&output_dir).join(&cfg.analysis_file);
    report::write_analysis(&analysis_path, &scores)?;

    Ok(())
}
