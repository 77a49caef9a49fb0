use std::env;

use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::models::secret::SecretValue;

/// Environment variable consulted for the standard variants' API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";
/// Environment variable consulted for the Azure-hosted variants' API key.
pub const AZURE_OPENAI_API_KEY_ENV: &str = "AZURE_OPENAI_API_KEY";
/// Environment variable consulted for the Azure-hosted variants' AD token.
pub const AZURE_OPENAI_AD_TOKEN_ENV: &str = "AZURE_OPENAI_AD_TOKEN";

/// Credentials for the standard (api.openai.com) client variants.
///
/// Embedded one-to-one by each standard configuration object; the binding is
/// fixed at construction and never re-resolved.
#[derive(Clone, Debug, Serialize)]
pub struct OpenAICredentials {
    pub api_key: SecretValue,
}

impl OpenAICredentials {
    /// Resolves the `api_key` field from `api_key` or [`OPENAI_API_KEY_ENV`].
    pub fn resolve(api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            api_key: require_secret(api_key, "api_key", OPENAI_API_KEY_ENV)?,
        })
    }
}

/// Credentials for the Azure-hosted client variants.
///
/// `api_key` is mandatory; `ad_token` is optional and left absent when no
/// source provides it.
#[derive(Clone, Debug, Serialize)]
pub struct AzureCredentials {
    pub api_key: SecretValue,
    pub ad_token: Option<SecretValue>,
}

impl AzureCredentials {
    /// Resolves both secret fields from their arguments or the
    /// `AZURE_OPENAI_*` environment variables.
    pub fn resolve(api_key: Option<String>, ad_token: Option<String>) -> Result<Self> {
        Ok(Self {
            api_key: require_secret(api_key, "api_key", AZURE_OPENAI_API_KEY_ENV)?,
            ad_token: resolve_secret(ad_token, AZURE_OPENAI_AD_TOKEN_ENV),
        })
    }
}

/// Resolves one secret field: a non-empty explicit argument wins, otherwise
/// the named environment variable is consulted once. Empty strings count as
/// absent on both paths.
///
/// The debug events record which source satisfied the field, never the value.
fn resolve_secret(explicit: Option<String>, env_var: &str) -> Option<SecretValue> {
    if let Some(raw) = explicit.filter(|v| !v.is_empty()) {
        debug!(env_var, "secret field resolved from explicit argument");
        return Some(SecretValue::new(raw));
    }
    match env::var(env_var) {
        Ok(raw) if !raw.is_empty() => {
            debug!(env_var, "secret field resolved from environment");
            Some(SecretValue::new(raw))
        }
        _ => None,
    }
}

fn require_secret(
    explicit: Option<String>,
    field: &'static str,
    env_var: &'static str,
) -> Result<SecretValue> {
    resolve_secret(explicit, env_var)
        .ok_or(ConfigError::MissingRequiredSecret { field, env_var })
}
