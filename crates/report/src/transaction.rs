//! For a transaction decoded from the JSON string held in a tenant block.
//!
//! Only the JSON syntax is checked. Fields are then read where present, so
//! unit variants like `"tx_type":"Transfer"` or an unusual `amount` do not
//! make a transaction unreadable.
use serde_json::Value;
use thiserror::Error;

use crate::{content::Content, dataset::value_label};

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("serde_json error {0}")]
    SerdeJson(#[from] serde_json::Error),
}

/// The parts of a tenant network transaction that the report uses.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TenantTransaction {
    pub id: Option<Value>,
    pub from: Option<Value>,
    pub to: Option<Value>,
    /// `tx_type.Message.content`, empty for other transaction types.
    pub content: String,
}

impl TenantTransaction {
    pub fn from_payload(payload: &str) -> Result<Self, TransactionError> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(Self::from(&value))
    }

    pub fn content(&self) -> Content<'_> {
        Content::new(&self.content)
    }

    pub fn id_label(&self) -> String {
        value_label(self.id.as_ref())
    }

    /// E.g., "T-Mobile ↔ Orange"
    pub fn from_to_label(&self) -> String {
        format!(
            "{} ↔ {}",
            value_label(self.from.as_ref()),
            value_label(self.to.as_ref())
        )
    }
}

impl From<&Value> for TenantTransaction {
    fn from(value: &Value) -> Self {
        let content = value
            .pointer("/tx_type/Message/content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        Self {
            id: value.get("id").cloned(),
            from: value.get("from").cloned(),
            to: value.get("to").cloned(),
            content,
        }
    }
}
