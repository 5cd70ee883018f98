use std::env;
use std::ffi::OsString;

use tracing::warn;

/// LlamaStack address used for document operations. Not configurable.
pub const LLAMASTACK_ENDPOINT: &str = "http://llamastack:8321";

/// Overrides the chat-completions endpoint (e.g. to route through an F5 proxy).
pub const CHAT_COMPLETIONS_ENDPOINT_VAR: &str = "CHAT_COMPLETIONS_ENDPOINT";

/// The chat endpoint doesn't check credentials, but the client sends a key anyway.
pub const DUMMY_API_KEY: &str = "dummy-key";

/// Resolved endpoints. Built once at startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    llamastack_endpoint: String,
    chat_endpoint: String,
}

impl EndpointConfig {
    /// Resolve endpoints from the process environment.
    ///
    /// A non-unicode override is ignored (logged) and the default is used.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| unicode_value(key, env::var_os(key)))
    }

    /// Resolve endpoints through `lookup` instead of the process environment.
    ///
    /// The override is taken verbatim; an empty string is still an override.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let chat_endpoint = lookup(CHAT_COMPLETIONS_ENDPOINT_VAR)
            .unwrap_or_else(|| LLAMASTACK_ENDPOINT.to_string());

        Self {
            llamastack_endpoint: LLAMASTACK_ENDPOINT.to_string(),
            chat_endpoint,
        }
    }

    pub fn llamastack_endpoint(&self) -> &str {
        &self.llamastack_endpoint
    }

    pub fn chat_endpoint(&self) -> &str {
        &self.chat_endpoint
    }
}

fn unicode_value(key: &str, raw: Option<OsString>) -> Option<String> {
    match raw?.into_string() {
        Ok(value) => Some(value),
        Err(raw) => {
            warn!(var = key, value = ?raw, "ignoring non-unicode value");
            None
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_llamastack() {
        let config = EndpointConfig::from_lookup(|_| None);
        assert_eq!(config.chat_endpoint(), "http://llamastack:8321");
        assert_eq!(config.llamastack_endpoint(), "http://llamastack:8321");
    }

    #[test]
    fn override_only_moves_chat_endpoint() {
        let config = EndpointConfig::from_lookup(|key| {
            (key == CHAT_COMPLETIONS_ENDPOINT_VAR).then(|| "http://f5-proxy:9000".to_string())
        });
        assert_eq!(config.chat_endpoint(), "http://f5-proxy:9000");
        assert_eq!(config.llamastack_endpoint(), LLAMASTACK_ENDPOINT);
    }

    #[test]
    fn override_is_taken_verbatim() {
        for value in ["", "  http://spaced:1 ", "not a url", "http://proxy/v1/"] {
            let config = EndpointConfig::from_lookup(|_| Some(value.to_string()));
            assert_eq!(config.chat_endpoint(), value);
            assert_eq!(config.llamastack_endpoint(), LLAMASTACK_ENDPOINT);
        }
    }

    #[test]
    fn unicode_override_passes_through() {
        let value = unicode_value(
            CHAT_COMPLETIONS_ENDPOINT_VAR,
            Some(OsString::from("http://f5-proxy:9000")),
        );
        assert_eq!(value.as_deref(), Some("http://f5-proxy:9000"));
        assert_eq!(unicode_value(CHAT_COMPLETIONS_ENDPOINT_VAR, None), None);
    }

    #[cfg(unix)]
    #[test]
    fn non_unicode_override_is_ignored() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"http://f5-proxy:\xff9000".to_vec());
        let config = EndpointConfig::from_lookup(|key| unicode_value(key, Some(raw.clone())));

        assert_eq!(config.chat_endpoint(), LLAMASTACK_ENDPOINT);
        assert_eq!(config, EndpointConfig::default());
    }

    #[test]
    fn only_reads_the_chat_variable() {
        let config = EndpointConfig::from_lookup(|key| {
            (key != CHAT_COMPLETIONS_ENDPOINT_VAR).then(|| "http://elsewhere:1".to_string())
        });
        assert_eq!(config, EndpointConfig::default());
    }
}
