use serde::Serialize;

use crate::error::Result;
use crate::models::credentials::{AzureCredentials, OpenAICredentials};
use crate::models::secret::SecretValue;

/// Model used when a chat configuration does not name one.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Configuration for a chat model client against api.openai.com.
///
/// Built through [`ChatConfig::builder`]; `build()` resolves the `api_key`
/// field exactly once, from the explicit argument or the `OPENAI_API_KEY`
/// environment variable, and fails if neither is set.
///
/// # Example
///
/// ```
/// use openai_client_config::ChatConfig;
///
/// let config = ChatConfig::builder()
///     .api_key("sk-test")
///     .model("gpt-4")
///     .build()
///     .unwrap();
/// assert_eq!(config.api_key().reveal(), "sk-test");
/// assert_eq!(format!("{:?}", config.api_key()), "**********");
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct ChatConfig {
    pub model: String,
    pub base_url: Option<String>,
    pub organization: Option<String>,
    credentials: OpenAICredentials,
}

impl ChatConfig {
    pub fn builder() -> ChatConfigBuilder {
        ChatConfigBuilder::default()
    }

    /// The bound API key. Call [`reveal`](SecretValue::reveal) on it when the
    /// credential has to go into an outbound request.
    pub fn api_key(&self) -> &SecretValue {
        &self.credentials.api_key
    }
}

#[derive(Default)]
pub struct ChatConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    organization: Option<String>,
}

impl ChatConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn build(self) -> Result<ChatConfig> {
        Ok(ChatConfig {
            credentials: OpenAICredentials::resolve(self.api_key)?,
            model: self.model.unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_owned()),
            base_url: self.base_url,
            organization: self.organization,
        })
    }
}

/// Configuration for a chat model client on an Azure OpenAI deployment.
///
/// Secret fields resolve from `AZURE_OPENAI_API_KEY` (mandatory) and
/// `AZURE_OPENAI_AD_TOKEN` (optional). `endpoint`, `api_version` and
/// `deployment` are carried for the client code that owns them; a trailing
/// `/` on the endpoint is stripped.
#[derive(Clone, Debug, Serialize)]
pub struct AzureChatConfig {
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    pub deployment: Option<String>,
    credentials: AzureCredentials,
}

impl AzureChatConfig {
    pub fn builder() -> AzureChatConfigBuilder {
        AzureChatConfigBuilder::default()
    }

    pub fn api_key(&self) -> &SecretValue {
        &self.credentials.api_key
    }

    pub fn ad_token(&self) -> Option<&SecretValue> {
        self.credentials.ad_token.as_ref()
    }
}

#[derive(Default)]
pub struct AzureChatConfigBuilder {
    api_key: Option<String>,
    ad_token: Option<String>,
    endpoint: Option<String>,
    api_version: Option<String>,
    deployment: Option<String>,
}

impl AzureChatConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn ad_token(mut self, ad_token: impl Into<String>) -> Self {
        self.ad_token = Some(ad_token.into());
        self
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn deployment(mut self, deployment: impl Into<String>) -> Self {
        self.deployment = Some(deployment.into());
        self
    }

    pub fn build(self) -> Result<AzureChatConfig> {
        Ok(AzureChatConfig {
            credentials: AzureCredentials::resolve(self.api_key, self.ad_token)?,
            endpoint: self.endpoint.map(|e| e.trim_end_matches('/').to_owned()),
            api_version: self.api_version,
            deployment: self.deployment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_never_shows_in_debug_output() {
        let config = ChatConfig::builder().api_key("foo").build().unwrap();
        assert!(!format!("{config:?}").contains("foo"));
    }

    #[test]
    fn model_defaults_when_not_named() {
        let config = ChatConfig::builder().api_key("sk-test").build().unwrap();
        assert_eq!(config.model, DEFAULT_CHAT_MODEL);
    }

    #[test]
    fn azure_endpoint_trailing_slash_is_stripped() {
        let config = AzureChatConfig::builder()
            .api_key("foo1")
            .ad_token("foo2")
            .endpoint("https://myresource.openai.azure.com/")
            .api_version("2024-02-15-preview")
            .build()
            .unwrap();
        assert_eq!(
            config.endpoint.as_deref(),
            Some("https://myresource.openai.azure.com")
        );
    }

    #[test]
    fn azure_debug_output_masks_both_secrets() {
        let config = AzureChatConfig::builder()
            .api_key("foo1")
            .ad_token("foo2")
            .endpoint("endpoint")
            .api_version("version")
            .build()
            .unwrap();
        let shown = format!("{config:?}");
        assert!(!shown.contains("foo1"));
        assert!(!shown.contains("foo2"));
        assert!(shown.contains("endpoint"));
    }
}
