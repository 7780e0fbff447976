//! For the pipe-delimited content string carried in a transaction message.
//!
//! The string holds `KEY:value` segments joined by `|`, with a record marker
//! somewhere in it. E.g.,
//! ```text
//! ZK_CONTRACT|TYPE:PRIVATE_ROAMING|PARTIES:T-Mobile,Orange|VERIFIED:true
//! ```
//! There is no escaping. A value containing `|` ends early, and the first
//! occurrence of a label wins.

/// Substituted when a label is absent from the content.
pub const NOT_AVAILABLE: &str = "N/A";

pub const DELIMITER: char = '|';

/// Marker for a private roaming contract.
pub const CONTRACT_MARKER: &str = "ZK_CONTRACT";
/// Marker for a proven session (call, SMS, data).
pub const SESSION_MARKER: &str = "ZK_SESSION";
/// Literal that marks a record as verified.
pub const VERIFIED_MARKER: &str = "VERIFIED:true";

pub const PARTIES: &str = "PARTIES:";
pub const DURATION_PROOF: &str = "DURATION_PROOF:";
pub const COMMITMENT: &str = "COMMITMENT:";
pub const DURATION: &str = "DURATION:";
pub const PROOF_TYPE: &str = "PROOF_TYPE:";
pub const PROOF_SIZE: &str = "PROOF_SIZE:";
pub const RECORD_TYPE: &str = "TYPE:";
pub const RANGE: &str = "RANGE:";

/// The kind of record a content string encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Contract,
    Session,
}

/// Typed view over a content string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Content<'a>(pub &'a str);

impl<'a> Content<'a> {
    pub fn new(content: &'a str) -> Self {
        Self(content)
    }

    /// Contract marker is checked first, so content holding both is a contract.
    pub fn kind(&self) -> Option<RecordKind> {
        if self.0.contains(CONTRACT_MARKER) {
            Some(RecordKind::Contract)
        } else if self.0.contains(SESSION_MARKER) {
            Some(RecordKind::Session)
        } else {
            None
        }
    }

    /// Value for a label (including trailing colon), or [`NOT_AVAILABLE`].
    pub fn field(&self, key: &str) -> String {
        extract_value(self.0, key)
    }

    pub fn is_verified(&self) -> bool {
        self.0.contains(VERIFIED_MARKER)
    }
}

/// Gets the value that follows the first occurrence of `key`.
///
/// The value runs to the next delimiter after the key, or to the end of the
/// content. Surrounding whitespace is trimmed. An absent key gives
/// [`NOT_AVAILABLE`].
pub fn extract_value(content: &str, key: &str) -> String {
    match find_value(content, key) {
        Some(value) => value.trim().to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn find_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    let start = content.find(key)? + key.len();
    let rest = content.get(start..)?;
    let end = rest.find(DELIMITER).unwrap_or(rest.len());
    rest.get(..end)
}
