use clap::Parser;
use std::path::PathBuf;

/// Apply point ledger operations from a CSV file
#[derive(Parser, Debug)]
#[command(name = "point-ledger")]
#[command(about = "Apply charge/use operations against a per-user point ledger", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing operation records
    #[arg(value_name = "INPUT", help = "Path to the input CSV file (user,kind,amount)")]
    pub input_file: PathBuf,

    /// Number of worker threads applying operations
    #[arg(
        long = "workers",
        value_name = "COUNT",
        help = "Worker threads applying operations concurrently (default: CPU cores)"
    )]
    pub workers: Option<usize>,
}

impl CliArgs {
    /// Resolve the worker count from CLI arguments
    ///
    /// Falls back to the number of CPU cores when unset or zero.
    pub fn worker_count(&self) -> usize {
        match self.workers {
            Some(count) if count > 0 => count,
            _ => num_cpus::get(),
        }
    }
}
