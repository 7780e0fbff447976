//! Classifies the transactions of tenant blocks into contract and session records.
//!
//! A transaction payload that is not valid JSON is skipped and remembered so
//! that the report can mention it. Transactions that are neither contracts nor
//! sessions are dropped.

use log::{trace, warn};
use serde::{Deserialize, Serialize};

use crate::{
    content::{
        Content, RecordKind, COMMITMENT, DURATION, DURATION_PROOF, PARTIES, PROOF_SIZE, PROOF_TYPE,
        RANGE, RECORD_TYPE,
    },
    dataset::TenantBlock,
    transaction::TenantTransaction,
};

/// Number of characters of an unparsable payload kept for display.
pub const PREVIEW_CHARS: usize = 50;

/// A private roaming contract between operators.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractRecord {
    pub id: String,
    /// Verbatim, e.g., "T-Mobile,Vodafone".
    pub parties: String,
    /// Claimed size of the duration proof.
    pub proof_size: String,
    pub commitment: String,
    pub verified: bool,
    /// E.g., "T-Mobile ↔ Vodafone".
    pub from_to: String,
    pub contract_type: String,
    pub range: String,
}

/// A call, SMS or data session with a claimed proof.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub id: String,
    /// Minutes.
    pub duration: String,
    pub proof_type: String,
    pub verified: bool,
    pub session_type: String,
    pub proof_size: String,
}

/// A transaction payload that could not be decoded.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedTransaction {
    /// Index of the block within the matched blocks.
    pub block_index: usize,
    /// Leading characters of the payload.
    pub preview: String,
}

/// Block identity as shown in the report.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
    pub id: String,
    pub hash: String,
    pub transaction_count: usize,
}

/// Everything of interest found in the blocks of one network.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofInventory {
    pub blocks: Vec<BlockSummary>,
    pub contracts: Vec<ContractRecord>,
    pub sessions: Vec<SessionRecord>,
    pub skipped: Vec<SkippedTransaction>,
}

/// A record derived from a single transaction.
#[derive(Clone, Debug, PartialEq)]
pub enum ProofRecord {
    Contract(ContractRecord),
    Session(SessionRecord),
}

impl ProofRecord {
    /// Creates a record if the transaction content has a record marker.
    pub fn classify(tx: &TenantTransaction) -> Option<Self> {
        let content = tx.content();
        match content.kind()? {
            RecordKind::Contract => Some(Self::Contract(ContractRecord::new(tx, &content))),
            RecordKind::Session => Some(Self::Session(SessionRecord::new(tx, &content))),
        }
    }
}

impl ContractRecord {
    fn new(tx: &TenantTransaction, content: &Content) -> Self {
        Self {
            id: tx.id_label(),
            parties: content.field(PARTIES),
            proof_size: content.field(DURATION_PROOF),
            commitment: content.field(COMMITMENT),
            verified: content.is_verified(),
            from_to: tx.from_to_label(),
            contract_type: content.field(RECORD_TYPE),
            range: content.field(RANGE),
        }
    }

    /// Whether the named operator appears in the parties.
    ///
    /// A substring test on the parties text, nothing cryptographic.
    pub fn visible_to(&self, operator: &str) -> bool {
        self.parties.contains(operator)
    }
}

impl SessionRecord {
    fn new(tx: &TenantTransaction, content: &Content) -> Self {
        Self {
            id: tx.id_label(),
            duration: content.field(DURATION),
            proof_type: content.field(PROOF_TYPE),
            verified: content.is_verified(),
            session_type: content.field(RECORD_TYPE),
            proof_size: content.field(PROOF_SIZE),
        }
    }
}

impl ProofInventory {
    /// Walks blocks and their transactions in order.
    pub fn from_blocks<'a, I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = &'a TenantBlock>,
    {
        let mut inventory = Self::default();
        for (block_index, block) in blocks.into_iter().enumerate() {
            inventory.blocks.push(BlockSummary {
                id: block.id_label(),
                hash: block.hash_label(),
                transaction_count: block.transactions.len(),
            });
            for payload in &block.transactions {
                inventory.add_payload(block_index, payload);
            }
        }
        inventory
    }

    fn add_payload(&mut self, block_index: usize, payload: &str) {
        let tx = match TenantTransaction::from_payload(payload) {
            Ok(tx) => tx,
            Err(e) => {
                let preview = preview(payload);
                warn!("Skipping transaction in block index {block_index} ({e}): {preview}");
                self.skipped.push(SkippedTransaction {
                    block_index,
                    preview,
                });
                return;
            }
        };
        match ProofRecord::classify(&tx) {
            Some(ProofRecord::Contract(contract)) => self.contracts.push(contract),
            Some(ProofRecord::Session(session)) => self.sessions.push(session),
            None => trace!("Ignoring transaction {} without record marker", tx.id_label()),
        }
    }

    /// Contracts and sessions together.
    pub fn proof_count(&self) -> usize {
        self.contracts.len() + self.sessions.len()
    }

    pub fn skipped_in_block(&self, block_index: usize) -> impl Iterator<Item = &SkippedTransaction> {
        self.skipped
            .iter()
            .filter(move |s| s.block_index == block_index)
    }
}

/// Leading characters of a payload (not bytes, so multibyte text is not split).
pub fn preview(payload: &str) -> String {
    payload.chars().take(PREVIEW_CHARS).collect()
}
