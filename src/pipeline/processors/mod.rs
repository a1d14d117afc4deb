// src/pipeline/processors/mod.rs

mod contract;
mod generic;
mod invoice;

pub use contract::ContractProcessor;
pub use generic::GenericProcessor;
pub use invoice::InvoiceProcessor;

use crate::data_model::FetchedDocument;
use crate::error::Result;
use async_trait::async_trait;

/// Type-specific handler for a fetched document.
///
/// The only contract the pipeline relies on: `process` either completes
/// (side effects durable) or fails with `PipelineError::ProcessingFailed`.
/// A failure is fatal to the invocation, never a partial success.
#[async_trait]
pub trait TypeProcessor: Send + Sync {
    fn name(&self) -> &'static str;

    async fn process(&self, document: &FetchedDocument, user_id: i64) -> Result<()>;
}
