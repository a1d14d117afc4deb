// src/pipeline/mod.rs

pub mod processors;
pub mod router;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{FuturesUnordered, StreamExt};
use tracing::{debug, info, warn};

use crate::config::ProcessorSettings;
use crate::data_model::{DocumentStatus, ProcessingOptions, ProcessingResult};
use crate::error::{PipelineError, Result};
use crate::fetcher::DocumentFetcher;
use crate::pipeline::router::TypeRouter;
use crate::store::DocumentStore;

/// Orchestrates one unit of work: fetch, validate, route, persist status.
///
/// Each `run` invocation is self-contained; the pipeline carries no
/// cross-invocation state, so concurrent runs need no coordination here.
pub struct ProcessingPipeline {
    store: Arc<dyn DocumentStore>,
    fetcher: Arc<dyn DocumentFetcher>,
    router: TypeRouter,
    size_ceiling_bytes: u64,
}

impl ProcessingPipeline {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        fetcher: Arc<dyn DocumentFetcher>,
        settings: &ProcessorSettings,
    ) -> Self {
        ProcessingPipeline {
            store,
            fetcher,
            router: TypeRouter::new(),
            size_ceiling_bytes: settings.size_ceiling_bytes,
        }
    }

    /// Processes one document end to end. Never returns an error: every
    /// failure path resolves to `ProcessingResult::Failed`.
    pub async fn run(&self, document_id: &str, options: ProcessingOptions) -> ProcessingResult {
        match self.run_inner(document_id, &options).await {
            Ok(processed_at) => {
                info!(document_id, "Document processed");
                ProcessingResult::success(processed_at)
            }
            Err(e) => {
                warn!(document_id, error = %e, "Document processing failed");
                ProcessingResult::failed(e.to_string())
            }
        }
    }

    async fn run_inner(
        &self,
        document_id: &str,
        options: &ProcessingOptions,
    ) -> Result<DateTime<Utc>> {
        // Rejected before any collaborator is contacted.
        if document_id.trim().is_empty() {
            return Err(PipelineError::InvalidInput);
        }

        let metadata = self
            .store
            .get_by_id(document_id)
            .await?
            .ok_or(PipelineError::NotFound)?;
        debug!(
            document_id,
            status = ?metadata.status,
            declared_type = %metadata.type_tag,
            "Document found in store"
        );

        let document = self.fetcher.fetch(document_id, options).await?;

        // Oversized payloads must never reach a processor.
        if document.size_bytes > self.size_ceiling_bytes {
            return Err(PipelineError::TooLarge);
        }

        // Routing uses the fetched tag, not the stored one; the remote
        // payload is authoritative for what the content actually is.
        let processor = self.router.resolve(&document.type_tag);
        debug!(document_id, processor = processor.name(), "Routing document");
        processor.process(&document, options.user_id).await?;

        // The commit runs only after processing succeeded. If it fails the
        // processor's side effects stay applied; there is no compensating
        // rollback at this layer.
        // TODO: outbox/idempotency-key hardening if commit failures show up.
        self.store
            .update_status(document_id, DocumentStatus::Processed)
            .await
            .map_err(|e| PipelineError::StatusCommitFailed(e.to_string()))?;

        Ok(Utc::now())
    }

    /// Runs many independent invocations concurrently. Results are returned
    /// keyed by document id, in completion order.
    pub async fn run_many(
        &self,
        jobs: Vec<(String, ProcessingOptions)>,
    ) -> Vec<(String, ProcessingResult)> {
        jobs.into_iter()
            .map(|(document_id, options)| async move {
                let result = self.run(&document_id, options).await;
                (document_id, result)
            })
            .collect::<FuturesUnordered<_>>()
            .collect()
            .await
    }
}
