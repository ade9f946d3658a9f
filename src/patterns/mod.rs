pub mod facade;
pub mod observer;
pub mod pizza;
pub mod proxy;
pub mod tax;

// Re-export commonly used types
pub use facade::TheaterFacade;
pub use observer::{Follower, Subscriber, TweetProducer};
pub use pizza::{FactoryPizzaStore, Pizza, PizzaStore, SimplePizzaFactory};
pub use proxy::{CachingFetchProxy, Fetch, NetworkFetcher};
pub use tax::{Purchaser, TaxRate, TaxRegistry};
