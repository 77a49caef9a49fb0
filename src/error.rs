use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while building a client configuration.
///
/// Construction is a single synchronous resolve-and-bind pass, so the only
/// failure mode is a mandatory secret field with no source.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "missing required secret field `{field}`: pass it explicitly or set the `{env_var}` environment variable"
    )]
    MissingRequiredSecret {
        field: &'static str,
        env_var: &'static str,
    },
}
