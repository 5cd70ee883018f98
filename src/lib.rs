pub mod clients;
pub mod config;
pub mod error;
pub mod types;

use std::sync::Arc;

use tracing::info;

pub use clients::{LlamaStackClient, OpenAiClient};
pub use config::{
    EndpointConfig, CHAT_COMPLETIONS_ENDPOINT_VAR, DUMMY_API_KEY, LLAMASTACK_ENDPOINT,
};
pub use error::ClientError;
pub use types::{
    ChatMessage, ChatRequest, ChatResponse, Choice, HealthInfo, LlamaStackModel, Model,
    RagDocument, ResponseMessage, Usage, VectorDb,
};

/// Client holder for the security UI: a fixed LlamaStack client for document
/// operations and a configurable OpenAI-compatible client for chat.
///
/// Build one at startup and hand it out by reference, or as an `Arc` via
/// [`SecurityApi::from_env_arc`].
#[derive(Debug, Clone)]
pub struct SecurityApi {
    config: EndpointConfig,
    llamastack_client: LlamaStackClient,
    openai_client: OpenAiClient,
}

impl SecurityApi {
    pub fn new(config: EndpointConfig) -> Self {
        let llamastack_client = LlamaStackClient::new(config.llamastack_endpoint());
        let openai_client = OpenAiClient::new(config.chat_endpoint()).with_api_key(DUMMY_API_KEY);

        info!(
            llamastack_endpoint = config.llamastack_endpoint(),
            chat_endpoint = config.chat_endpoint(),
            "security api clients ready"
        );

        Self {
            config,
            llamastack_client,
            openai_client,
        }
    }

    /// Resolve endpoints from the environment (`CHAT_COMPLETIONS_ENDPOINT`).
    pub fn from_env() -> Self {
        Self::new(EndpointConfig::from_env())
    }

    /// [`SecurityApi::from_env`] wrapped in an `Arc`. Every call builds a new
    /// instance: call it once and clone the `Arc` for each consumer.
    pub fn from_env_arc() -> Arc<Self> {
        Arc::new(Self::from_env())
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Chat completions endpoint. Defaults to LlamaStack, may point at an F5 proxy.
    pub fn get_chat_endpoint(&self) -> &str {
        self.config.chat_endpoint()
    }

    /// The fixed LlamaStack endpoint.
    pub fn get_llamastack_endpoint(&self) -> &str {
        self.config.llamastack_endpoint()
    }

    /// Same as [`SecurityApi::get_llamastack_endpoint`]; the upload page asks for it by this name.
    pub fn get_current_endpoint(&self) -> &str {
        self.config.llamastack_endpoint()
    }

    pub fn get_llamastack_client(&self) -> &LlamaStackClient {
        &self.llamastack_client
    }

    pub fn get_openai_client(&self) -> &OpenAiClient {
        &self.openai_client
    }
}

impl Default for SecurityApi {
    fn default() -> Self {
        Self::new(EndpointConfig::default())
    }
}
