use std::error::Error;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::{csv_utils::read_csv, dto::Operation, runner::write_report, Config, ExpenseStore};

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Applies the operations in the given input file and writes the configured report.
///
/// # Arguments
/// * `input_path` - Path to the input CSV file containing operations
/// * `config` - Totals policy for the store and the report to write
/// * `writer` - Where to write the report (e.g. stdout)
///
/// # Errors
/// Returns an error if:
/// * The input file cannot be read
/// * The CSV is malformed
/// * Writing to the output fails
pub fn run<P, W>(input_path: P, config: &Config, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    let mut store = ExpenseStore::with_policy(config.totals_policy);

    let operations_iter = read_csv::<Operation, _>(input_path)?;
    for (row, operation) in operations_iter.enumerate() {
        // CSV parsing errors are critical - propagate them
        let operation = operation?;
        // Rejected operations are skipped, the store is unchanged by them
        if let Err(e) = store.apply(operation) {
            warn!(row, "skipping operation: {e}");
        }
    }
    info!(
        records = store.len(),
        visible = store.visible_len(),
        report = %config.report,
        "operations applied"
    );

    write_report(&store, &config.report, writer)?;
    Ok(())
}
