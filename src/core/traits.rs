/// Single-capability behavior selected at runtime by key
///
/// Every variant stored in a [`StrategyRegistry`](super::registry::StrategyRegistry)
/// exposes the same `compute` operation, so callers never need to know which
/// concrete type they were handed.
pub trait Strategy {
    type Input;
    type Output;

    /// Apply this strategy to an input
    fn compute(&self, input: Self::Input) -> Self::Output;
}

/// Zero-argument constructor producing a fresh strategy instance
pub type Constructor<S> = Box<dyn Fn() -> Box<S> + Send + Sync>;
