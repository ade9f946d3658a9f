use crate::core::errors::{RegistryError, Result};
use crate::core::traits::{Constructor, Strategy};
use log::debug;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Maps keys to constructors of interchangeable strategy objects
///
/// The registry is populated once at startup and read-only afterwards. Every
/// `resolve` builds a new instance; nothing is pooled or cached.
pub struct StrategyRegistry<K, S: ?Sized> {
    constructors: HashMap<K, Constructor<S>>,
}

impl<K, S> StrategyRegistry<K, S>
where
    K: Eq + Hash + Clone + fmt::Display,
    S: ?Sized,
{
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register a constructor under `key`
    ///
    /// A key can be registered once; the first mapping is kept on conflict.
    pub fn register<F>(&mut self, key: K, constructor: F) -> Result<()>
    where
        F: Fn() -> Box<S> + Send + Sync + 'static,
    {
        if self.constructors.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key.to_string()));
        }

        debug!("Registered strategy '{}'", key);
        self.constructors.insert(key, Box::new(constructor));
        Ok(())
    }

    /// Builder form of [`register`](Self::register)
    pub fn with<F>(mut self, key: K, constructor: F) -> Result<Self>
    where
        F: Fn() -> Box<S> + Send + Sync + 'static,
    {
        self.register(key, constructor)?;
        Ok(self)
    }

    /// Construct a new strategy instance for `key`
    pub fn resolve<Q>(&self, key: &Q) -> Result<Box<S>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        self.constructors
            .get(key)
            .map(|constructor| constructor())
            .ok_or_else(|| RegistryError::UnknownKey(key.to_string()))
    }

    /// Check if a key is registered
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.constructors.contains_key(key)
    }

    /// Registered keys, ordered by their display form
    pub fn keys(&self) -> Vec<&K> {
        let mut keys: Vec<&K> = self.constructors.keys().collect();
        keys.sort_by_cached_key(|key| key.to_string());
        keys
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<K, S> StrategyRegistry<K, S>
where
    K: Eq + Hash + Clone + fmt::Display,
    S: Strategy + ?Sized,
{
    /// Resolve `key` and run the strategy on `input`
    pub fn dispatch<Q>(&self, key: &Q, input: S::Input) -> Result<S::Output>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Display + ?Sized,
    {
        let strategy = self.resolve(key)?;
        Ok(strategy.compute(input))
    }
}

impl<K, S> Default for StrategyRegistry<K, S>
where
    K: Eq + Hash + Clone + fmt::Display,
    S: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, S> fmt::Debug for StrategyRegistry<K, S>
where
    K: Eq + Hash + Clone + fmt::Display,
    S: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keys: Vec<String> = self.keys().iter().map(|key| key.to_string()).collect();
        f.debug_struct("StrategyRegistry").field("keys", &keys).finish()
    }
}
