use crate::core::errors::{ConfigError, Result};
use crate::core::registry::StrategyRegistry;
use crate::core::traits::Strategy;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Registry of tax strategies keyed by destination code
pub type TaxRegistry = StrategyRegistry<String, TaxRate>;

/// Percentage tax applied to a price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaxRate {
    rate: f64,
}

impl TaxRate {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl Strategy for TaxRate {
    type Input = f64;
    type Output = f64;

    fn compute(&self, price: f64) -> f64 {
        (self.rate * price) / 100.0
    }
}

/// One destination and its tax rate in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEntry {
    pub key: String,
    pub rate: f64,
}

/// Destination table used to build a [`TaxRegistry`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxTable {
    pub entries: Vec<TaxEntry>,
}

impl TaxTable {
    /// Parse a table from JSON, e.g. `{"entries":[{"key":"uk","rate":10}]}`
    pub fn from_json(json: &str) -> std::result::Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a registry with one constructor per entry
    ///
    /// Rates must be finite and non-negative. A repeated key aborts the build.
    pub fn build_registry(&self) -> std::result::Result<TaxRegistry, ConfigError> {
        let mut registry = TaxRegistry::new();

        for entry in &self.entries {
            if !entry.rate.is_finite() || entry.rate < 0.0 {
                return Err(ConfigError::InvalidRate {
                    key: entry.key.clone(),
                    rate: entry.rate,
                });
            }

            let rate = entry.rate;
            registry.register(entry.key.clone(), move || Box::new(TaxRate::new(rate)))?;
        }

        debug!("Built tax registry with {} destinations", registry.len());
        Ok(registry)
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        let entries = [("uk", 10.0), ("eu", 5.0), ("us", 15.0)]
            .into_iter()
            .map(|(key, rate)| TaxEntry {
                key: key.to_string(),
                rate,
            })
            .collect();
        Self { entries }
    }
}

/// Registry for the built-in destinations: uk (10%), eu (5%), us (15%)
pub fn tax_registry() -> Result<TaxRegistry> {
    TaxRegistry::new()
        .with("uk".to_string(), || Box::new(TaxRate::new(10.0)))?
        .with("eu".to_string(), || Box::new(TaxRate::new(5.0)))?
        .with("us".to_string(), || Box::new(TaxRate::new(15.0)))
}

/// Computes the final price of a purchase under a tax strategy
#[derive(Debug, Default)]
pub struct Purchaser;

impl Purchaser {
    pub fn new() -> Self {
        Self
    }

    /// Price plus the tax computed by `strategy`
    pub fn purchase<S>(&self, price: f64, strategy: &S) -> f64
    where
        S: Strategy<Input = f64, Output = f64> + ?Sized,
    {
        let total = price + strategy.compute(price);
        info!("Purchase of {} totals {}", price, total);
        total
    }

    /// Resolve the destination's strategy, then purchase
    pub fn purchase_for(&self, registry: &TaxRegistry, destination: &str, price: f64) -> Result<f64> {
        let strategy = registry.resolve(destination)?;
        Ok(self.purchase(price, strategy.as_ref()))
    }
}
