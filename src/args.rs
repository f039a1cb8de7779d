//! Command-line interface for the expense-ledger binary.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

use expense_ledger::{Config, Report, TotalsPolicy};

/// expense-ledger: apply a CSV file of expense operations and print a report.
///
/// Each input row is either `add,<amount>,<category>,<date>,` or `delete,,,,<index>`, under the
/// header `op,amount,category,date,index`. Indices are the ids assigned to added expenses in
/// order, starting at 0. Rows that cannot be applied are logged and skipped.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    /// Path to the CSV file of operations.
    input: PathBuf,

    /// The report to print: expenses, totals, category=<name>, date=<YYYY-MM-DD>,
    /// between=<from>..<to> or top=<n>
    #[arg(long, default_value_t = Report::Expenses)]
    report: Report,

    /// Whether deletes reduce category totals: cumulative or recompute-on-delete
    #[arg(long, default_value_t = TotalsPolicy::Cumulative)]
    totals_policy: TotalsPolicy,

    /// Stream the input on a separate task instead of reading it inline.
    #[arg(long = "async")]
    use_async: bool,

    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,
}

impl Args {
    pub fn input(&self) -> &Path {
        &self.input
    }

    pub fn use_async(&self) -> bool {
        self.use_async
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn config(&self) -> Config {
        Config {
            totals_policy: self.totals_policy,
            report: self.report.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["expense-ledger", "ops.csv"]).unwrap();
        assert_eq!(args.input(), Path::new("ops.csv"));
        assert!(!args.use_async());
        assert_eq!(args.log_level(), LevelFilter::WARN);
        let config = args.config();
        assert_eq!(config.report, Report::Expenses);
        assert_eq!(config.totals_policy, TotalsPolicy::Cumulative);
    }

    #[test]
    fn test_all_flags() {
        let args = Args::try_parse_from([
            "expense-ledger",
            "ops.csv",
            "--report",
            "top=5",
            "--totals-policy",
            "recompute-on-delete",
            "--async",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(args.use_async());
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
        let config = args.config();
        assert_eq!(config.report, Report::Top(5));
        assert_eq!(config.totals_policy, TotalsPolicy::RecomputeOnDelete);
    }

    #[test]
    fn test_rejects_unknown_report() {
        assert!(Args::try_parse_from(["expense-ledger", "ops.csv", "--report", "weekly"]).is_err());
    }
}
