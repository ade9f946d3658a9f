pub mod core;
pub mod logging;
pub mod patterns;
pub mod shell;

// Re-export commonly used types
pub use crate::core::errors::RegistryError;
pub use crate::core::registry::StrategyRegistry;
pub use crate::core::traits::Strategy;
pub use crate::core::types::SubscriptionId;
