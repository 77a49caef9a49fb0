use serde::Serialize;

use crate::error::Result;
use crate::models::credentials::{AzureCredentials, OpenAICredentials};
use crate::models::secret::SecretValue;

/// Model used when an embedding configuration does not name one.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Batch size used when splitting input texts for the embeddings endpoint.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Configuration for an embedding model client against api.openai.com.
#[derive(Clone, Debug, Serialize)]
pub struct EmbeddingConfig {
    pub model: String,
    pub chunk_size: usize,
    pub base_url: Option<String>,
    pub organization: Option<String>,
    credentials: OpenAICredentials,
}

impl EmbeddingConfig {
    pub fn builder() -> EmbeddingConfigBuilder {
        EmbeddingConfigBuilder::default()
    }

    pub fn api_key(&self) -> &SecretValue {
        &self.credentials.api_key
    }
}

#[derive(Default)]
pub struct EmbeddingConfigBuilder {
    api_key: Option<String>,
    model: Option<String>,
    chunk_size: Option<usize>,
    base_url: Option<String>,
    organization: Option<String>,
}

impl EmbeddingConfigBuilder {
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
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

    pub fn build(self) -> Result<EmbeddingConfig> {
        Ok(EmbeddingConfig {
            credentials: OpenAICredentials::resolve(self.api_key)?,
            model: self
                .model
                .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_owned()),
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
            base_url: self.base_url,
            organization: self.organization,
        })
    }
}

/// Configuration for an embedding model client on an Azure OpenAI deployment.
#[derive(Clone, Debug, Serialize)]
pub struct AzureEmbeddingConfig {
    pub endpoint: Option<String>,
    pub api_version: Option<String>,
    pub deployment: Option<String>,
    pub chunk_size: usize,
    credentials: AzureCredentials,
}

impl AzureEmbeddingConfig {
    pub fn builder() -> AzureEmbeddingConfigBuilder {
        AzureEmbeddingConfigBuilder::default()
    }

    pub fn api_key(&self) -> &SecretValue {
        &self.credentials.api_key
    }

    pub fn ad_token(&self) -> Option<&SecretValue> {
        self.credentials.ad_token.as_ref()
    }
}

#[derive(Default)]
pub struct AzureEmbeddingConfigBuilder {
    api_key: Option<String>,
    ad_token: Option<String>,
    endpoint: Option<String>,
    api_version: Option<String>,
    deployment: Option<String>,
    chunk_size: Option<usize>,
}

impl AzureEmbeddingConfigBuilder {
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

    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = Some(chunk_size);
        self
    }

    pub fn build(self) -> Result<AzureEmbeddingConfig> {
        Ok(AzureEmbeddingConfig {
            credentials: AzureCredentials::resolve(self.api_key, self.ad_token)?,
            endpoint: self.endpoint.map(|e| e.trim_end_matches('/').to_owned()),
            api_version: self.api_version,
            deployment: self.deployment,
            chunk_size: self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_key_never_shows_in_debug_output() {
        let config = EmbeddingConfig::builder().api_key("foo").build().unwrap();
        assert!(!format!("{config:?}").contains("foo"));
    }

    #[test]
    fn reveal_returns_the_bound_key() {
        let config = EmbeddingConfig::builder()
            .api_key("secret-api-key")
            .build()
            .unwrap();
        assert_eq!(config.api_key().reveal(), "secret-api-key");
    }

    #[test]
    fn chunk_size_defaults() {
        let config = EmbeddingConfig::builder().api_key("sk-test").build().unwrap();
        assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn azure_debug_output_masks_both_secrets() {
        let config = AzureEmbeddingConfig::builder()
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
