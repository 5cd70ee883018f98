use tracing::debug;

use super::{endpoint_url, send_json};
use crate::error::ClientError;
use crate::types::{ChatRequest, ChatResponse, ListResponse, Model};

/// OpenAI-compatible client. Paths are appended to the base URL as-is, so
/// point it at whatever prefix the server mounts its OpenAI routes under.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Sent as a bearer token on every request.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.api_key {
            Some(ref key) => req.header("authorization", format!("Bearer {key}")),
            None => req,
        }
    }

    pub async fn chat_completion(
        &self,
        request: &ChatRequest,
    ) -> Result<ChatResponse, ClientError> {
        let url = endpoint_url(&self.base_url, "/chat/completions");
        debug!(
            %url,
            model = %request.model,
            messages = request.messages.len(),
            "chat completion request"
        );

        let req = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(request);

        send_json(self.authorize(req)).await
    }

    pub async fn list_models(&self) -> Result<Vec<Model>, ClientError> {
        let url = endpoint_url(&self.base_url, "/models");
        debug!(%url, "listing models");

        let list: ListResponse<Model> = send_json(self.authorize(self.client.get(url))).await?;
        Ok(list.data)
    }
}
