use serde_json::json;
use tracing::debug;

use super::{endpoint_url, send_json, send_text};
use crate::error::ClientError;
use crate::types::{HealthInfo, ListResponse, LlamaStackModel, RagDocument, VectorDb};

/// Client for the LlamaStack HTTP API (`/v1/...` routes).
#[derive(Debug, Clone)]
pub struct LlamaStackClient {
    client: reqwest::Client,
    base_url: String,
}

impl LlamaStackClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthInfo, ClientError> {
        let url = endpoint_url(&self.base_url, "/v1/health");
        debug!(%url, "health check");
        send_json(self.client.get(url)).await
    }

    pub async fn list_models(&self) -> Result<Vec<LlamaStackModel>, ClientError> {
        let url = endpoint_url(&self.base_url, "/v1/models");
        debug!(%url, "listing models");
        let list: ListResponse<LlamaStackModel> = send_json(self.client.get(url)).await?;
        Ok(list.data)
    }

    pub async fn list_vector_dbs(&self) -> Result<Vec<VectorDb>, ClientError> {
        let url = endpoint_url(&self.base_url, "/v1/vector-dbs");
        debug!(%url, "listing vector dbs");
        let list: ListResponse<VectorDb> = send_json(self.client.get(url)).await?;
        Ok(list.data)
    }

    /// Hand documents to the RAG tool, which chunks and indexes them into
    /// `vector_db_id`.
    pub async fn insert_documents(
        &self,
        vector_db_id: &str,
        documents: &[RagDocument],
        chunk_size_in_tokens: u32,
    ) -> Result<(), ClientError> {
        let url = endpoint_url(&self.base_url, "/v1/tool-runtime/rag-tool/insert");
        debug!(
            %url,
            vector_db_id,
            documents = documents.len(),
            chunk_size_in_tokens,
            "inserting documents"
        );

        let body = json!({
            "vector_db_id": vector_db_id,
            "documents": documents,
            "chunk_size_in_tokens": chunk_size_in_tokens,
        });

        // Success body is `null` or empty; nothing to decode.
        send_text(self.client.post(url).json(&body)).await?;
        Ok(())
    }
}
