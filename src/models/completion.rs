use serde::Serialize;

use crate::error::Result;
use crate::models::credentials::{AzureCredentials, OpenAICredentials};
use crate::models::secret::SecretValue;

/// Model used when a completion configuration does not name one.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";

/// Configuration for a text completion client against api.openai.com.
///
/// Same construction contract as [`ChatConfig`](crate::models::chat::ChatConfig):
/// `build()` resolves `api_key` once from the explicit argument or
/// `OPENAI_API_KEY`, and fails if neither is set.
#[derive(Clone, Debug, Serialize)]
pub struct CompletionConfig {
    pub model: String,
    pub base_url: Option<String>,
    pub organization: Option<String>,
    credentials: OpenAICredentials,
}

impl CompletionConfig {
    pub fn builder() -> CompletionConfigBuilder {
        CompletionConfigBuilder::default()
    }

    pub fn api_key(&self) -> &SecretValue {
        &self.credentials.api_key
    }
}

#[derive(Default)]
pub struct CompletionConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    organization: Option<String>,
}

impl CompletionConfigBuilder {
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

    pub fn build(self) -> Result<CompletionConfig> {
        Ok(CompletionConfig {
            credentials: OpenAICredentials::resolve(self.api_key)?,
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_owned()),
            base_url: self.base_url,
            organization: self.organization,
        })
    }
}

/// Configuration for a text completion client on an Azure OpenAI deployment.
#[derive(Clone, Debug, Serialize)]
pub struct AzureCompletionConfig {
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    pub deployment: Option<String>,
    credentials: AzureCredentials,
}

impl AzureCompletionConfig {
    pub fn builder() -> AzureCompletionConfigBuilder {
        AzureCompletionConfigBuilder::default()
    }

    pub fn api_key(&self) -> &SecretValue {
        &self.credentials.api_key
    }

    pub fn ad_token(&self) -> Option<&SecretValue> {
        self.credentials.ad_token.as_ref()
    }
}

#[derive(Default)]
pub struct AzureCompletionConfigBuilder {
    api_key: Option<String>,
    ad_token: Option<String>,
    endpoint: Option<String>,
    api_version: Option<String>,
    deployment: Option<String>,
}

impl AzureCompletionConfigBuilder {
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

    pub fn build(self) -> Result<AzureCompletionConfig> {
        Ok(AzureCompletionConfig {
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
        let config = CompletionConfig::builder().api_key("foo").build().unwrap();
        assert!(!format!("{config:?}").contains("foo"));
    }

    #[test]
    fn reveal_returns_the_bound_key() {
        let config = CompletionConfig::builder()
            .api_key("secret-api-key")
            .build()
            .unwrap();
        assert_eq!(config.api_key().reveal(), "secret-api-key");
    }

    #[test]
    fn azure_debug_output_masks_both_secrets() {
        let config = AzureCompletionConfig::builder()
            .api_key("foo1")
            .ad_token("foo2")
            .endpoint("endpoint")
            .api_version("version")
            .build()
            .unwrap();
        let shown = format!("{config:?}");
        assert!(!shown.contains("foo1"));
        assert!(!shown.contains("foo2"));
    }
}
