pub mod config;
pub mod content;
pub mod dataset;
pub mod record;
pub mod report;
pub mod transaction;

pub use config::ReportConfig;
pub use content::{extract_value, Content, RecordKind, NOT_AVAILABLE};
pub use dataset::{DatasetError, TenantBlock, ValidatorDataset};
pub use record::{ContractRecord, ProofInventory, SessionRecord, SkippedTransaction};
pub use report::Report;

/// Loads the configured data file and collects the proof records of the configured network.
pub fn inventory_from_config(config: &ReportConfig) -> Result<ProofInventory, DatasetError> {
    let dataset = ValidatorDataset::load(&config.data_path)?;
    let blocks = dataset.blocks_for_network(&config.network_id);
    Ok(ProofInventory::from_blocks(blocks))
}
