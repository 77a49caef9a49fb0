pub mod chat;
pub mod completion;
pub mod credentials;
pub mod embedding;
pub mod secret;

pub use chat::{AzureChatConfig, ChatConfig};
pub use completion::{AzureCompletionConfig, CompletionConfig};
pub use credentials::{AzureCredentials, OpenAICredentials};
pub use embedding::{AzureEmbeddingConfig, EmbeddingConfig};
pub use secret::{SECRET_MASK, SecretValue};
