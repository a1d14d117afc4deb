use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a stored document. Owned by the document store;
/// the pipeline only reads it and requests transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Pending,
    Processing,
    Processed,
    Failed,
}

/// Stored record for a document, as returned by the document store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: String,
    pub status: DocumentStatus,
    /// Declared type tag, e.g. "invoice" or "contract". May be anything.
    pub type_tag: String,
}

/// Transient payload fetched from the remote content source. Owned by a
/// single pipeline invocation; never cached or shared across invocations.
///
/// Wire shape matches what the remote returns: the tag field is named
/// `type` and the size is reported alongside the content rather than
/// re-measured from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedDocument {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub size_bytes: u64,
    pub content: String,
}

/// Per-invocation options. Passed by value, never mutated.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProcessingOptions {
    pub high_priority: bool,
    pub user_id: i64,
}

/// Outcome of one pipeline invocation.
///
/// Constructed only through [`ProcessingResult::success`] and
/// [`ProcessingResult::failed`]; a result can never carry both a
/// timestamp and a failure reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProcessingResult {
    Success { processed_at: DateTime<Utc> },
    Failed { reason: String },
}

impl ProcessingResult {
    pub fn success(processed_at: DateTime<Utc>) -> Self {
        ProcessingResult::Success { processed_at }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        ProcessingResult::Failed {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessingResult::Success { .. })
    }
}
