use crate::core::errors::Result;
use crate::core::registry::StrategyRegistry;
use log::info;

/// Pizza preparation steps; each returns the line describing the step
pub trait Pizza {
    fn name(&self) -> &str;

    fn prepare(&self) -> String {
        format!("Preparing {} Pizza", self.name())
    }

    fn bake(&self) -> String {
        format!("Baking {} Pizza", self.name())
    }

    fn cut(&self) -> String {
        format!("Cutting {} Pizza", self.name())
    }

    fn box_up(&self) -> String {
        format!("Boxing {} Pizza", self.name())
    }
}

/// A pizza from the standard menu, distinguished only by its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPizza {
    name: &'static str,
}

impl MenuPizza {
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Pizza for MenuPizza {
    fn name(&self) -> &str {
        self.name
    }
}

/// Order keys and display names of the standard menu
pub const MENU: [(&str, &str); 4] = [
    ("cheese", "Cheese"),
    ("pepperoni", "Pepperoni"),
    ("veggie", "Veggie"),
    ("meatlovers", "Meat Lovers"),
];

/// Builds pizzas by order key
pub struct SimplePizzaFactory {
    registry: StrategyRegistry<String, dyn Pizza>,
}

impl SimplePizzaFactory {
    /// Factory over the standard menu
    pub fn new() -> Result<Self> {
        let mut registry: StrategyRegistry<String, dyn Pizza> = StrategyRegistry::new();
        for (key, name) in MENU {
            registry.register(key.to_string(), move || -> Box<dyn Pizza> {
                Box::new(MenuPizza::new(name))
            })?;
        }
        Ok(Self { registry })
    }

    /// Factory over a caller-provided registry
    pub fn from_registry(registry: StrategyRegistry<String, dyn Pizza>) -> Self {
        Self { registry }
    }

    pub fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>> {
        self.registry.resolve(kind)
    }

    /// Order keys this factory accepts
    pub fn kinds(&self) -> Vec<&str> {
        self.registry.keys().into_iter().map(String::as_str).collect()
    }
}

/// A store that knows how to make pizzas and runs every order the same way
pub trait PizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>>;

    /// Create the pizza, then prepare, bake, cut and box it
    fn order_pizza(&self, kind: &str) -> Result<Vec<String>> {
        let pizza = self.create_pizza(kind)?;
        info!("Ordering {} pizza", pizza.name());

        Ok(vec![pizza.prepare(), pizza.bake(), pizza.cut(), pizza.box_up()])
    }
}

/// Store that delegates pizza creation to a [`SimplePizzaFactory`]
pub struct FactoryPizzaStore {
    factory: SimplePizzaFactory,
}

impl FactoryPizzaStore {
    pub fn new(factory: SimplePizzaFactory) -> Self {
        Self { factory }
    }

    pub fn factory(&self) -> &SimplePizzaFactory {
        &self.factory
    }
}

impl PizzaStore for FactoryPizzaStore {
    fn create_pizza(&self, kind: &str) -> Result<Box<dyn Pizza>> {
        self.factory.create_pizza(kind)
    }
}
