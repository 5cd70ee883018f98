pub mod llamastack;
pub mod openai;

use serde::de::DeserializeOwned;

use crate::error::ClientError;

pub use llamastack::LlamaStackClient;
pub use openai::OpenAiClient;

/// Join `path` onto `base`, dropping any trailing slashes on the base.
fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Send a request and return the body of a 2xx response. Anything else is an `ApiError`.
async fn send_text(req: reqwest::RequestBuilder) -> Result<String, ClientError> {
    let resp = req
        .send()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| ClientError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(ClientError::ApiError {
            status: status.as_u16(),
            body: text,
        });
    }

    Ok(text)
}

async fn send_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ClientError> {
    let text = send_text(req).await?;
    serde_json::from_str(&text).map_err(|e| ClientError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_without_double_slash() {
        assert_eq!(
            endpoint_url("http://llamastack:8321/", "/v1/health"),
            "http://llamastack:8321/v1/health"
        );
        assert_eq!(
            endpoint_url("http://f5-proxy:9000/v1", "/chat/completions"),
            "http://f5-proxy:9000/v1/chat/completions"
        );
    }
}
