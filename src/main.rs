//! Point Ledger CLI
//!
//! Command-line interface for applying ledger operations from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- operations.csv > balances.csv
//! cargo run -- --workers 8 operations.csv > balances.csv
//! ```
//!
//! The program reads operation records (`user,kind,amount` with kinds
//! `charge`/`use`) from the input CSV file, applies them concurrently
//! against an in-memory ledger, and writes the final balances to stdout.
//! Rejected operations and malformed rows are reported on stderr via
//! `RUST_LOG`-controlled logging.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use point_ledger::core::{apply_operations, LedgerService};
use point_ledger::io::{read_operations_csv, write_balances_csv};
use point_ledger::{cli, LedgerError};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn run(args: &cli::CliArgs) -> Result<(), LedgerError> {
    let operations = read_operations_csv(&args.input_file)?;

    let service = LedgerService::new();
    let outcome = apply_operations(&service, &operations, args.worker_count());

    info!(
        applied = outcome.applied,
        rejected = outcome.rejected,
        workers = args.worker_count(),
        "batch complete"
    );

    let mut output = std::io::stdout();
    write_balances_csv(&service.all_balances(), &mut output)
}

fn main() {
    // Logs go to stderr so stdout stays clean for the balances CSV.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
