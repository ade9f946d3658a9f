//! Configuration for batch dispatch
//!
//! Controls whether a batch of requests is resolved on the calling thread or
//! spread across a Rayon thread pool.

/// Enumeration of supported concurrency modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConcurrencyMode {
    /// Requests are dispatched in order on the calling thread
    #[default]
    Sequential,
    /// Requests are dispatched concurrently using Rayon
    Rayon,
}

/// Configuration for batch dispatch
#[derive(Debug, Clone, Default)]
pub struct DispatchConfig {
    /// The concurrency mode to use for dispatch
    pub concurrency_mode: ConcurrencyMode,
    /// Dedicated pool size for parallel dispatch; the global pool is used when unset.
    /// Only relevant when concurrency_mode is Rayon
    pub thread_pool_size: Option<usize>,
}

impl DispatchConfig {
    /// Sequential dispatch without a dedicated pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the concurrency mode
    pub fn with_concurrency(mut self, mode: ConcurrencyMode) -> Self {
        self.concurrency_mode = mode;
        self
    }

    /// Set the thread pool size for parallel dispatch
    ///
    /// # Note
    /// This setting only affects dispatch when concurrency_mode is Rayon
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
