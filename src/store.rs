use crate::data_model::{DocumentMetadata, DocumentStatus};
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Consumed interface of the document store collaborator.
///
/// The store owns document metadata and is responsible for serializing
/// conflicting status updates if that guarantee is needed; this crate does
/// no per-id locking of its own.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get_by_id(&self, document_id: &str) -> Result<Option<DocumentMetadata>>;

    async fn update_status(&self, document_id: &str, status: DocumentStatus) -> Result<()>;
}

/// Map-backed store, mainly for tests and local runs.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<String, DocumentMetadata>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, metadata: DocumentMetadata) {
        let mut documents = self.documents.write().await;
        documents.insert(metadata.id.clone(), metadata);
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn get_by_id(&self, document_id: &str) -> Result<Option<DocumentMetadata>> {
        let documents = self.documents.read().await;
        Ok(documents.get(document_id).cloned())
    }

    async fn update_status(&self, document_id: &str, status: DocumentStatus) -> Result<()> {
        let mut documents = self.documents.write().await;
        match documents.get_mut(document_id) {
            Some(metadata) => {
                metadata.status = status;
                Ok(())
            }
            None => Err(PipelineError::StoreError(format!(
                "cannot update status of unknown document '{}'",
                document_id
            ))),
        }
    }
}
