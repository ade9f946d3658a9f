use crate::core::config::{ConcurrencyMode, DispatchConfig};
use crate::core::errors::{DispatchError, RegistryError};
use crate::core::registry::StrategyRegistry;
use crate::core::traits::Strategy;
use log::debug;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use std::fmt;
use std::hash::Hash;

/// Dispatches many `(key, input)` requests against one read-only registry
///
/// Results come back in request order regardless of concurrency mode. When
/// several requests fail, the error of the earliest one is returned.
pub struct BatchDispatcher<'a, K, S: ?Sized> {
    registry: &'a StrategyRegistry<K, S>,
    config: DispatchConfig,
    /// Dedicated pool, present only in Rayon mode with an explicit size
    pool: Option<ThreadPool>,
}

impl<'a, K, S> BatchDispatcher<'a, K, S>
where
    K: Eq + Hash + Clone + fmt::Display + Sync,
    S: Strategy + ?Sized,
    S::Input: Clone + Send + Sync,
    S::Output: Send,
{
    /// Create a dispatcher, building its thread pool up front when one is configured
    pub fn new(registry: &'a StrategyRegistry<K, S>, config: DispatchConfig) -> Result<Self, DispatchError> {
        Self::with_pool_builder(registry, config, |size| {
            ThreadPoolBuilder::new()
                .num_threads(size)
                .thread_name(|index| format!("dispatch-{}", index))
                .build()
        })
    }

    pub(crate) fn with_pool_builder<F>(
        registry: &'a StrategyRegistry<K, S>,
        config: DispatchConfig,
        build_pool: F,
    ) -> Result<Self, DispatchError>
    where
        F: FnOnce(usize) -> Result<ThreadPool, ThreadPoolBuildError>,
    {
        let pool = match (config.concurrency_mode, config.thread_pool_size) {
            (ConcurrencyMode::Rayon, Some(size)) => {
                let pool = build_pool(size)?;
                debug!("Built dispatch pool with {} threads", pool.current_num_threads());
                Some(pool)
            }
            _ => None,
        };

        Ok(Self {
            registry,
            config,
            pool,
        })
    }

    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Thread count of the dedicated pool, if one was built
    pub fn pool_threads(&self) -> Option<usize> {
        self.pool.as_ref().map(ThreadPool::current_num_threads)
    }

    /// Dispatch every request and collect the outputs
    pub fn dispatch_all(&self, requests: &[(K, S::Input)]) -> Result<Vec<S::Output>, DispatchError> {
        debug!(
            "Dispatching batch of {} requests ({:?})",
            requests.len(),
            self.config.concurrency_mode
        );

        let results = match (self.config.concurrency_mode, &self.pool) {
            (ConcurrencyMode::Sequential, _) => self.dispatch_sequential(requests),
            (ConcurrencyMode::Rayon, Some(pool)) => pool.install(|| self.dispatch_parallel(requests)),
            (ConcurrencyMode::Rayon, None) => self.dispatch_parallel(requests),
        };

        results
            .into_iter()
            .collect::<Result<Vec<_>, RegistryError>>()
            .map_err(DispatchError::from)
    }

    fn dispatch_sequential(&self, requests: &[(K, S::Input)]) -> Vec<Result<S::Output, RegistryError>> {
        requests
            .iter()
            .map(|(key, input)| self.registry.dispatch(key, input.clone()))
            .collect()
    }

    fn dispatch_parallel(&self, requests: &[(K, S::Input)]) -> Vec<Result<S::Output, RegistryError>> {
        requests
            .par_iter()
            .map(|(key, input)| self.registry.dispatch(key, input.clone()))
            .collect()
    }
}
