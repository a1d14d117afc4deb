use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::data_model::FetchedDocument;
use crate::error::{PipelineError, Result};
use crate::pipeline::processors::TypeProcessor;

#[derive(Debug, Deserialize)]
struct ContractPayload {
    counterparty: String,
    effective_date: Option<String>,
}

#[derive(Default)]
pub struct ContractProcessor;

impl ContractProcessor {
    pub fn new() -> Self {
        ContractProcessor
    }
}

#[async_trait]
impl TypeProcessor for ContractProcessor {
    fn name(&self) -> &'static str {
        "ContractProcessor"
    }

    async fn process(&self, document: &FetchedDocument, user_id: i64) -> Result<()> {
        let payload: ContractPayload =
            serde_json::from_str(&document.content).map_err(|e| PipelineError::ProcessingFailed {
                processor: self.name(),
                cause: format!("contract content is not valid: {}", e),
            })?;

        if payload.counterparty.trim().is_empty() {
            return Err(PipelineError::ProcessingFailed {
                processor: self.name(),
                cause: "contract counterparty is empty".to_string(),
            });
        }

        info!(
            user_id,
            counterparty = %payload.counterparty,
            effective_date = payload.effective_date.as_deref().unwrap_or("unspecified"),
            "Contract recorded"
        );
        Ok(())
    }
}
