//! For Command Line Interface for zkdash_dashboard

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use zkdash_report::{
    config::{DEFAULT_DATA_PATH, DEFAULT_NETWORK_ID, DEFAULT_OPERATORS},
    ReportConfig,
};

/// Show what the ZK proof dashboard should display, based on the
/// tenant blocks held by a validator.
///
/// Run from the directory containing `data/`, or pass the file with `--data`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct AppArgs {
    /// Validator data file to read.
    #[clap(short, long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,
    /// Network whose tenant blocks hold the ZK proofs.
    #[clap(short, long, default_value_t = String::from(DEFAULT_NETWORK_ID))]
    pub network: String,
    /// Operator to report visibility for. Repeat to list several.
    #[clap(short = 'p', long = "operator", default_values = DEFAULT_OPERATORS)]
    pub operators: Vec<String>,
    /// How to print the report.
    #[clap(value_enum, default_value_t = OutputKind::Pretty)]
    pub output: OutputKind,
}

/// Format of the report written to stdout.
#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum OutputKind {
    /// Human readable text
    Pretty,
    /// Single JSON document
    Json,
}

impl AppArgs {
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            data_path: self.data.clone(),
            network_id: self.network.clone(),
            operators: self.operators.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_match_library_config() {
        let args = AppArgs::parse_from(["zkdash_dashboard"]);
        assert_eq!(args.output, OutputKind::Pretty);
        assert_eq!(args.report_config(), ReportConfig::default());
    }

    #[test]
    fn test_operators_replace_defaults() {
        let args = AppArgs::parse_from([
            "zkdash_dashboard",
            "-p",
            "Orange",
            "--operator",
            "Telefonica",
            "--network",
            "zk_contracts_live",
            "json",
        ]);
        let config = args.report_config();
        assert_eq!(config.operators, vec!["Orange", "Telefonica"]);
        assert_eq!(config.network_id, "zk_contracts_live");
        assert_eq!(args.output, OutputKind::Json);
    }
}
