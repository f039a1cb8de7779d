use std::error::Error;
use std::io::Write;
use std::path::Path;

use crate::{dto::Operation, runner::write_report, Config, ExpenseStore, TotalsPolicy};

use csv_async::{AsyncReaderBuilder, Error as CsvError, Trim};
use tokio::fs::File;
use tokio::sync::mpsc;
use tokio_stream::StreamExt;
use tracing::{info, warn};

const BUFFER_SIZE: usize = 1024;

type Result<T, E = Box<dyn Error + Send + Sync>> = std::result::Result<T, E>;

/// Applies the operations in the given input file asynchronously and writes the configured report.
/// Spawns two tasks:
/// * CSV reader - streams operations from the input file, deserializes them and sends them to the processor via channel.
/// * Processor - owns the store and applies operations until the channel is closed.
///
/// The processor is the only task touching the store, so no locking is needed.
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
pub async fn run<P, W>(input_path: P, config: Config, writer: W) -> Result<()>
where
    P: AsRef<Path>,
    W: Write,
{
    // Create channel for passing operations from reader to processor
    let (tx, rx) = mpsc::channel(BUFFER_SIZE);
    let input_path = input_path.as_ref().to_owned();

    let reader_handle = tokio::spawn(read_operations(input_path, tx));
    let processor_handle = tokio::spawn(process_operations(rx, config.totals_policy));

    // Wait for reader to finish and propagate any errors
    reader_handle.await??;

    // Get final store state
    let store = processor_handle.await?;
    info!(
        records = store.len(),
        visible = store.visible_len(),
        report = %config.report,
        "operations applied"
    );

    write_report(&store, &config.report, writer)?;
    Ok(())
}

/// Reads and deserializes operations from a CSV file.
/// Returns them through the provided channel.
async fn read_operations(
    input_path: impl AsRef<Path> + Send,
    tx: mpsc::Sender<Operation>,
) -> Result<(), CsvError> {
    let file = File::open(input_path).await?;
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .create_deserializer(file);

    let mut records = csv_reader.deserialize::<Operation>();
    while let Some(result) = records.next().await {
        match result {
            Ok(operation) => {
                if tx.send(operation).await.is_err() {
                    // Receiver dropped, exit gracefully
                    break;
                }
            }
            // CSV parsing errors are critical - propagate them
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Applies operations received through the channel.
/// Returns the final store once the channel is closed by the reader.
async fn process_operations(
    mut rx: mpsc::Receiver<Operation>,
    totals_policy: TotalsPolicy,
) -> ExpenseStore {
    let mut store = ExpenseStore::with_policy(totals_policy);
    let mut row = 0usize;
    while let Some(operation) = rx.recv().await {
        if let Err(e) = store.apply(operation) {
            warn!(row, "skipping operation: {e}");
        }
        row += 1;
    }
    store
}
