//! Inputs that select what is read and who is reported on.
use std::path::PathBuf;

/// File a validator writes its local state to.
pub const DEFAULT_DATA_PATH: &str = "data/enterprise_blockchain_validator1.json";
/// Network that tenant blocks with ZK proofs are submitted under.
pub const DEFAULT_NETWORK_ID: &str = "zk_real_proofs";
/// Operators that the visibility section reports on.
pub const DEFAULT_OPERATORS: [&str; 4] = ["T-Mobile", "Vodafone", "Orange", "AT&T"];
/// Script that creates the validator data file.
pub const SETUP_SCRIPT: &str = "./test_zk_real_proofs.sh";

#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    pub data_path: PathBuf,
    pub network_id: String,
    pub operators: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            network_id: DEFAULT_NETWORK_ID.to_string(),
            operators: DEFAULT_OPERATORS.iter().map(|o| o.to_string()).collect(),
        }
    }
}
