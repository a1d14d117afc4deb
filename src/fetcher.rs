use crate::data_model::{FetchedDocument, ProcessingOptions};
use crate::error::{PipelineError, Result};
use async_trait::async_trait;
use tracing::debug;

/// Consumed interface of the remote content source.
#[async_trait]
pub trait DocumentFetcher: Send + Sync {
    /// Retrieves the raw payload and metadata for `document_id`. Issues one
    /// outbound request; retry policy, if any, belongs to the transport.
    async fn fetch(
        &self,
        document_id: &str,
        options: &ProcessingOptions,
    ) -> Result<FetchedDocument>;
}

/// HTTP implementation against `GET {endpoint}/documents/{id}`.
pub struct HttpDocumentFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpDocumentFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Injects a preconfigured client (timeouts, proxies, etc.).
    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        HttpDocumentFetcher {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    fn document_url(&self, document_id: &str) -> String {
        format!("{}/documents/{}", self.endpoint, document_id)
    }
}

#[async_trait]
impl DocumentFetcher for HttpDocumentFetcher {
    async fn fetch(
        &self,
        document_id: &str,
        options: &ProcessingOptions,
    ) -> Result<FetchedDocument> {
        let url = self.document_url(document_id);
        debug!(%url, high_priority = options.high_priority, "Fetching document payload");

        let mut request = self.client.get(&url);
        if options.high_priority {
            request = request.header("Priority", "high");
        }

        let response = request
            .send()
            .await
            .map_err(|e| PipelineError::RemoteUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::RemoteUnavailable(format!(
                "remote returned status {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PipelineError::RemoteUnavailable(e.to_string()))?;

        let document: FetchedDocument = serde_json::from_slice(&body)?;
        debug!(
            type_tag = %document.type_tag,
            size_bytes = document.size_bytes,
            "Fetched document payload"
        );
        Ok(document)
    }
}
