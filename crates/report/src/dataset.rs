//! For loading a validator data file and selecting the tenant blocks of one network.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::content::NOT_AVAILABLE;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Validator data file {} not found", .path.display())]
    NotFound { path: PathBuf },
    #[error("IO error {0}")]
    Io(#[from] io::Error),
    #[error("serde_json error {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// Local state written by a validator (e.g., `enterprise_blockchain_validator1.json`).
///
/// Only the tenant blocks are of interest; other fields are ignored.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ValidatorDataset {
    #[serde(default)]
    pub tenant_blocks: Vec<TenantBlock>,
}

/// A block forwarded from a tenant network.
///
/// Identity fields are kept as raw JSON values; a block with an odd field
/// is still listed rather than failing the whole file.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct TenantBlock {
    pub block_id: Option<Value>,
    pub block_hash: Option<Value>,
    pub network_id: Option<Value>,
    /// Each transaction is itself JSON, encoded as a string.
    #[serde(default)]
    pub transactions: Vec<String>,
}

/// Displays an optional JSON value, using the sentinel if absent or null.
///
/// Strings are shown without quotes.
pub(crate) fn value_label(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

impl TenantBlock {
    pub fn id_label(&self) -> String {
        value_label(self.block_id.as_ref())
    }
    pub fn hash_label(&self) -> String {
        value_label(self.block_hash.as_ref())
    }
    /// Network the block came from. Empty if absent, null or not a string.
    pub fn network(&self) -> &str {
        self.network_id
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl ValidatorDataset {
    /// Reads and parses the whole file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DatasetError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DatasetError::Io(e),
        })?;
        let dataset = Self::from_json(&data)?;
        debug!(
            "Loaded {} tenant blocks from {}",
            dataset.tenant_blocks.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn from_json(data: &str) -> Result<Self, DatasetError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Blocks from the given network, in the order they appear in the file.
    pub fn blocks_for_network<'a>(&'a self, network_id: &str) -> Vec<&'a TenantBlock> {
        self.tenant_blocks
            .iter()
            .filter(|block| block.network() == network_id)
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const DATASET: &str = r#"{
        "chain": [{"height": 0, "validator": "genesis"}],
        "tenant_blocks": [
            {"block_id": 2001, "block_hash": "zk_a", "network_id": "zk_real_proofs", "transactions": []},
            {"block_id": 2002, "block_hash": "other", "network_id": "zk_live_sessions", "transactions": []},
            {"block_id": "late", "block_hash": "zk_b", "network_id": "zk_real_proofs", "transactions": ["{}"]},
            {"block_id": 2004, "block_hash": "no_network", "transactions": []}
        ]
    }"#;

    #[test]
    fn test_filter_preserves_order() {
        let dataset = ValidatorDataset::from_json(DATASET).unwrap();
        let blocks = dataset.blocks_for_network("zk_real_proofs");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].id_label(), "2001");
        assert_eq!(blocks[1].id_label(), "late");
        assert_eq!(blocks[1].transactions.len(), 1);
    }

    #[test]
    fn test_block_without_network_does_not_match() {
        let dataset = ValidatorDataset::from_json(DATASET).unwrap();
        let blocks = dataset.blocks_for_network("");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].hash_label(), "no_network");
        assert!(dataset.blocks_for_network("unknown").is_empty());
    }

    #[test]
    fn test_missing_tenant_blocks() {
        let dataset = ValidatorDataset::from_json(r#"{"chain": []}"#).unwrap();
        assert!(dataset.tenant_blocks.is_empty());
    }

    #[test]
    fn test_missing_block_fields_use_sentinel() {
        let block: TenantBlock = serde_json::from_str(r#"{"network_id": "x"}"#).unwrap();
        assert_eq!(block.id_label(), NOT_AVAILABLE);
        assert_eq!(block.hash_label(), NOT_AVAILABLE);
    }

    #[test]
    fn test_null_network_does_not_match() {
        let data = r#"{"tenant_blocks": [
            {"block_id": 1, "block_hash": "a", "network_id": null, "transactions": []},
            {"block_id": 2, "block_hash": "b", "network_id": 7, "transactions": []},
            {"block_id": 3, "block_hash": "c", "network_id": "zk_real_proofs", "transactions": []}
        ]}"#;
        let dataset = ValidatorDataset::from_json(data).unwrap();
        let blocks = dataset.blocks_for_network("zk_real_proofs");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].hash_label(), "c");
        assert_eq!(dataset.tenant_blocks[0].network(), "");
    }

    #[test]
    fn test_unread_block_fields_do_not_fail_load() {
        let data = r#"{"tenant_blocks": [
            {"block_id": 1.5, "block_hash": null, "network_id": "zk_real_proofs",
             "timestamp": "2024-06-10", "previous_hash": 42, "transactions": []}
        ]}"#;
        let dataset = ValidatorDataset::from_json(data).unwrap();
        let blocks = dataset.blocks_for_network("zk_real_proofs");
        assert_eq!(blocks[0].id_label(), "1.5");
        assert_eq!(blocks[0].hash_label(), NOT_AVAILABLE);
    }

    #[test]
    fn test_load_missing_file() {
        let err = ValidatorDataset::load("data/does_not_exist.json").unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }

    #[test]
    fn test_invalid_document() {
        let err = ValidatorDataset::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, DatasetError::SerdeJson(_)));
    }
}
