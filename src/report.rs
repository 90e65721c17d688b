use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::models::ScoreRecord;

const CSV_HEADER: &str = "wallet,credit_score";
const HISTOGRAM_BIN_WIDTH: f64 = 100.0;
const HISTOGRAM_MAX_BAR: usize = 40;

/// Fixed score ranges, lower-bound inclusive. The top range also admits
/// the maximum score itself.
const SCORE_RANGES: &[(f64, f64, &str)] = &[
    (0.0, 300.0, "Very Poor (0-300)"),
    (300.0, 500.0, "Fair (300-500)"),
    (500.0, 700.0, "Good (500-700)"),
    (700.0, 850.0, "Very Good (700-850)"),
    (850.0, 1000.0, "Excellent (850-1000)"),
];

#[derive(Debug, Clone)]
pub struct ScoreSummary {
    pub total_wallets: usize,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
}

impl ScoreSummary {
    pub fn from_scores(scores: &[ScoreRecord]) -> Self {
        let n = scores.len();
        if n == 0 {
            return ScoreSummary {
                total_wallets: 0,
                mean: 0.0,
                median: 0.0,
                min: 0.0,
                max: 0.0,
                std_dev: 0.0,
            };
        }

        let values: Vec<f64> = scores.iter().map(|s| s.credit_score).collect();
        let mean = values.iter().sum::<f64>() / n as f64;
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        };

        let std_dev = if n > 1 {
            let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / (n as f64 - 1.0);
            variance.sqrt()
        } else {
            0.0
        };

        ScoreSummary {
            total_wallets: n,
            mean,
            median,
            min,
            max,
            std_dev,
        }
    }

    pub fn print_summary(&self) {
        println!("\nScore Summary:");
        println!("  Total wallets scored: {}", self.total_wallets);
        println!("  Average score: {:.2}", self.mean);
        println!("  Min score:     {:.2}", self.min);
        println!("  Max score:     {:.2}", self.max);
        println!("  Median score:  {:.2}", self.median);
        println!("  Std dev:       {:.2}", self.std_dev);
    }
}

#[derive(Debug, Clone)]
pub struct RangeCount {
    pub label: &'static str,
    pub count: usize,
    pub percentage: f64,
}

/// Bucket scores into the fixed named ranges, lower-bound inclusive.
pub fn bucket_counts(scores: &[ScoreRecord]) -> Vec<RangeCount> {
    let total = scores.len();
    SCORE_RANGES
        .iter()
        .map(|&(lo, hi, label)| {
            let is_top = (hi - 1000.0).abs() < f64::EPSILON;
            let count = scores
                .iter()
                .filter(|s| {
                    let v = s.credit_score;
                    v >= lo && (v < hi || (is_top && v <= hi))
                })
                .count();
            RangeCount {
                label,
                count,
                percentage: if total > 0 {
                    count as f64 / total as f64 * 100.0
                } else {
                    0.0
                },
            }
        })
        .collect()
}

pub fn print_range_table(ranges: &[RangeCount]) {
    println!("\nScore Distribution by Range:");
    for r in ranges {
        println!("  {:<22} {:>8} ({:.1}%)", r.label, r.count, r.percentage);
    }
}

/// Write the score table as `wallet,credit_score` CSV, one row per wallet
/// in the given order.
pub fn write_scores_csv<P: AsRef<Path>>(path: P, scores: &[ScoreRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut f = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writeln!(f, "{}", CSV_HEADER)?;
    for s in scores {
        writeln!(f, "{},{}", s.wallet, s.credit_score)?;
    }

    info!("Saved {} scores to {}", scores.len(), path.display());
    Ok(())
}

/// Load a previously written scores CSV.
pub fn load_scores_csv<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreRecord>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let mut scores = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if i == 0 && line.trim() == CSV_HEADER {
            continue;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let (wallet, raw_score) = line
            .split_once(',')
            .with_context(|| format!("malformed CSV line {}: {}", i + 1, line))?;
        let credit_score: f64 = raw_score
            .trim()
            .parse()
            .with_context(|| format!("bad score on line {}: {}", i + 1, raw_score))?;
        scores.push(ScoreRecord {
            wallet: wallet.trim().to_string(),
            credit_score,
        });
    }

    info!("Loaded {} scores from {}", scores.len(), path.display());
    Ok(scores)
}

/// Write the markdown analysis report: statistics, range table, and a
/// textual score histogram.
pub fn write_analysis<P: AsRef<Path>>(path: P, scores: &[ScoreRecord]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let summary = ScoreSummary::from_scores(scores);
    let ranges = bucket_counts(scores);

    let mut f = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writeln!(f, "# Credit Score Analysis")?;
    writeln!(f)?;
    writeln!(f, "- **Total Wallets Analyzed**: {}", summary.total_wallets)?;
    writeln!(f, "- **Average Score**: {:.2}", summary.mean)?;
    writeln!(f)?;
    writeln!(f, "## Statistics")?;
    writeln!(f)?;
    writeln!(f, "| Statistic | Value |")?;
    writeln!(f, "|-----------|-------|")?;
    writeln!(f, "| count | {} |", summary.total_wallets)?;
    writeln!(f, "| mean | {:.2} |", summary.mean)?;
    writeln!(f, "| std | {:.2} |", summary.std_dev)?;
    writeln!(f, "| min | {:.2} |", summary.min)?;
    writeln!(f, "| median | {:.2} |", summary.median)?;
    writeln!(f, "| max | {:.2} |", summary.max)?;
    writeln!(f)?;
    writeln!(f, "## Score Distribution by Range")?;
    writeln!(f)?;
    writeln!(f, "| Score Range | Wallets | Percentage |")?;
    writeln!(f, "|-------------|---------|------------|")?;
    for r in &ranges {
        writeln!(f, "| {} | {} | {:.1}% |", r.label, r.count, r.percentage)?;
    }
    writeln!(f)?;
    writeln!(f, "## Distribution")?;
    writeln!(f)?;
    writeln!(f, "```")?;
    for line in histogram_lines(scores) {
        writeln!(f, "{}", line)?;
    }
    writeln!(f, "```")?;

    info!("Analysis report saved to {}", path.display());
    Ok(())
}

/// Fixed-width text histogram over 100-point bins.
fn histogram_lines(scores: &[ScoreRecord]) -> Vec<String> {
    let bins = (1000.0 / HISTOGRAM_BIN_WIDTH) as usize;
    let mut counts = vec![0usize; bins];
    for s in scores {
        let idx = ((s.credit_score / HISTOGRAM_BIN_WIDTH) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    let peak = counts.iter().copied().max().unwrap_or(0).max(1);
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lo = i as f64 * HISTOGRAM_BIN_WIDTH;
            let hi = lo + HISTOGRAM_BIN_WIDTH;
            let bar_len = count * HISTOGRAM_MAX_BAR / peak;
            format!(
                "{:>4.0}-{:<4.0} | {:<width$} {}",
                lo,
                hi,
                "#".repeat(bar_len),
                count,
                width = HISTOGRAM_MAX_BAR
            )
        })
        .collect()
}
