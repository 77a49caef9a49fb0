//! Configuration and secret handling for OpenAI-style model clients.
//!
//! Six configuration objects — chat, completion and embedding, each in a
//! standard and an Azure-hosted variant — bind their credential fields as
//! [`SecretValue`]s at construction time. A secret resolves from an explicit
//! builder argument first, then from its environment variable
//! (`OPENAI_API_KEY`, `AZURE_OPENAI_API_KEY`, `AZURE_OPENAI_AD_TOKEN`), and a
//! mandatory field with no source fails construction with
//! [`ConfigError::MissingRequiredSecret`].
//!
//! Printing, logging and serializing any of these objects shows `**********`
//! in place of each secret; the raw value comes back only through an explicit
//! [`SecretValue::reveal`] call.
//!
//! # Example
//!
//! ```
//! use openai_client_config::AzureChatConfig;
//!
//! let config = AzureChatConfig::builder()
//!     .api_key("secret-api-key")
//!     .ad_token("secret-ad-token")
//!     .endpoint("https://myresource.openai.azure.com")
//!     .api_version("2024-02-15-preview")
//!     .build()
//!     .unwrap();
//!
//! // Generic output is masked; the request path asks for the raw value.
//! assert_eq!(format!("{}", config.api_key()), "**********");
//! assert_eq!(config.api_key().reveal(), "secret-api-key");
//! ```

pub mod error;
pub mod models;
pub mod utils;

pub use error::{ConfigError, Result};
pub use models::chat::{AzureChatConfig, ChatConfig};
pub use models::completion::{AzureCompletionConfig, CompletionConfig};
pub use models::credentials::{AzureCredentials, OpenAICredentials};
pub use models::embedding::{AzureEmbeddingConfig, EmbeddingConfig};
pub use models::secret::{SECRET_MASK, SecretValue};
pub use utils::init_tracing;
