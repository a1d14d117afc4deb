use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::data_model::FetchedDocument;
use crate::error::{PipelineError, Result};
use crate::pipeline::processors::TypeProcessor;

/// Structured content an invoice document is expected to carry.
#[derive(Debug, Deserialize)]
struct InvoicePayload {
    invoice_number: String,
    total: f64,
    currency: Option<String>,
}

#[derive(Default)]
pub struct InvoiceProcessor;

impl InvoiceProcessor {
    pub fn new() -> Self {
        InvoiceProcessor
    }
}

#[async_trait]
impl TypeProcessor for InvoiceProcessor {
    fn name(&self) -> &'static str {
        "InvoiceProcessor"
    }

    async fn process(&self, document: &FetchedDocument, user_id: i64) -> Result<()> {
        let payload: InvoicePayload =
            serde_json::from_str(&document.content).map_err(|e| PipelineError::ProcessingFailed {
                processor: self.name(),
                cause: format!("invoice content is not valid: {}", e),
            })?;

        if payload.invoice_number.trim().is_empty() {
            return Err(PipelineError::ProcessingFailed {
                processor: self.name(),
                cause: "invoice number is empty".to_string(),
            });
        }
        if payload.total < 0.0 {
            return Err(PipelineError::ProcessingFailed {
                processor: self.name(),
                cause: format!("invoice total is negative: {}", payload.total),
            });
        }

        info!(
            user_id,
            invoice_number = %payload.invoice_number,
            total = payload.total,
            currency = payload.currency.as_deref().unwrap_or("unspecified"),
            "Invoice recorded"
        );
        Ok(())
    }
}
