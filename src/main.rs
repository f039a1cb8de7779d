use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use expense_ledger::{run, run_async};

mod args;

use args::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(args.log_level());
    debug!("{args:?}");

    match run_app(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Exiting with error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run_app(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = args.config();
    if args.use_async() {
        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(run_async(args.input(), config, std::io::stdout()))
    } else {
        run(args.input(), &config, std::io::stdout())
    }
}

fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise apply the requested level to this crate only. The binary and
        // library share one crate name.
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
