use anyhow::Result;
use clap::Parser;
use log::error;
use zkdash_report::{config::SETUP_SCRIPT, inventory_from_config, DatasetError, Report};

use crate::cli::{AppArgs, OutputKind};

mod cli;

/// Prints what the ZK proof dashboard should display.
///
/// Reads the validator data file, selects the tenant blocks of the ZK proof
/// network and summarises the contracts and sessions they carry.
/// ```command
/// cargo run --release -p zkdash_dashboard -- --data data/enterprise_blockchain_validator1.json
/// ```
/// A missing or unreadable data file is reported on stdout and is not a
/// failed run.
fn main() -> Result<()> {
    env_logger::init();

    let args = AppArgs::parse();
    let config = args.report_config();

    let inventory = match inventory_from_config(&config) {
        Ok(inventory) => inventory,
        Err(DatasetError::NotFound { path }) => {
            error!("No data file at {}", path.display());
            println!("❌ Validator data file not found");
            println!("Make sure to run the test script first: {SETUP_SCRIPT}");
            return Ok(());
        }
        Err(e) => {
            println!("❌ Error: {e}");
            return Ok(());
        }
    };

    let report = Report::new(&config.network_id, &inventory, &config.operators);
    match args.output {
        OutputKind::Pretty => report.print_pretty(),
        OutputKind::Json => report.print_json(),
    }
    Ok(())
}
