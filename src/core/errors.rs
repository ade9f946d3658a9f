use thiserror::Error;

/// Errors raised while populating or querying a strategy registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No constructor is registered under the key
    #[error("No strategy registered for key '{0}'")]
    UnknownKey(String),

    /// A constructor is already registered under the key
    #[error("Strategy with key '{0}' is already registered")]
    DuplicateKey(String),
}

/// Errors raised while turning configuration into runtime objects
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid tax rate {rate} for key '{key}'")]
    InvalidRate { key: String, rate: f64 },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// Errors raised by batch dispatch
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Failed to build dispatch thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
