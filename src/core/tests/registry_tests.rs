#[cfg(test)]
mod tests {
    use crate::core::errors::RegistryError;
    use crate::core::registry::StrategyRegistry;
    use crate::core::traits::Strategy;

    /// Test strategy: scales the input by a fixed percentage
    #[derive(Debug)]
    struct Percent(u32);

    impl Strategy for Percent {
        type Input = u32;
        type Output = u32;

        fn compute(&self, input: u32) -> u32 {
            self.0 * input / 100
        }
    }

    fn rates() -> StrategyRegistry<String, Percent> {
        StrategyRegistry::new()
            .with("uk".to_string(), || Box::new(Percent(10)))
            .and_then(|r| r.with("eu".to_string(), || Box::new(Percent(5))))
            .and_then(|r| r.with("us".to_string(), || Box::new(Percent(15))))
            .unwrap()
    }

    #[test]
    fn test_dispatch_uses_registered_rate() {
        let registry = rates();
        assert_eq!(registry.dispatch("uk", 100), Ok(10));
        assert_eq!(registry.dispatch("eu", 100), Ok(5));
        assert_eq!(registry.dispatch("us", 100), Ok(15));
    }

    #[test]
    fn test_lookup_by_borrowed_or_owned_key() {
        let registry = rates();
        let owned = "uk".to_string();
        assert_eq!(registry.dispatch(&owned, 100), registry.dispatch("uk", 100));
        assert_eq!(registry.resolve("eu").unwrap().compute(100), 5);
        assert!(registry.contains("us"));
        assert!(!registry.contains("fr"));
    }

    #[test]
    fn test_dispatch_matches_resolve_then_compute() {
        let registry = rates();
        for key in registry.keys() {
            for input in [0, 1, 99, 100, 12_345] {
                let resolved = registry.resolve(key).unwrap().compute(input);
                assert_eq!(registry.dispatch(key, input).unwrap(), resolved);
            }
        }
    }

    #[test]
    fn test_unknown_key_fails() {
        let registry = rates();
        let result = registry.dispatch("fr", 100);
        assert_eq!(result, Err(RegistryError::UnknownKey("fr".to_string())));
        assert!(registry.resolve("fr").is_err());
    }

    #[test]
    fn test_duplicate_key_keeps_first_mapping() {
        let mut registry = rates();
        let result = registry.register("uk".to_string(), || Box::new(Percent(50)));

        assert_eq!(result, Err(RegistryError::DuplicateKey("uk".to_string())));
        assert_eq!(registry.dispatch("uk", 100), Ok(10));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_builder_aborts_on_duplicate() {
        let result = StrategyRegistry::<String, Percent>::new()
            .with("uk".to_string(), || Box::new(Percent(10)))
            .and_then(|r| r.with("uk".to_string(), || Box::new(Percent(20))));
        assert!(matches!(result, Err(RegistryError::DuplicateKey(_))));
    }

    #[test]
    fn test_resolve_returns_distinct_instances() {
        let registry = rates();
        let key = "uk".to_string();
        let first = registry.resolve(&key).unwrap();
        let second = registry.resolve(&key).unwrap();
        assert!(!std::ptr::eq(first.as_ref(), second.as_ref()));
    }

    #[test]
    fn test_keys_are_sorted() {
        let registry = rates();
        let keys: Vec<&str> = registry.keys().into_iter().map(String::as_str).collect();
        assert_eq!(keys, vec!["eu", "uk", "us"]);
        assert!(registry.contains(&"eu".to_string()));
        assert!(!registry.contains(&"fr".to_string()));
        assert!(!registry.is_empty());
        assert!(StrategyRegistry::<String, Percent>::default().is_empty());
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Shape {
        Square,
        Circle,
    }

    impl std::fmt::Display for Shape {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Shape::Square => write!(f, "square"),
                Shape::Circle => write!(f, "circle"),
            }
        }
    }

    trait Area {
        fn area(&self, size: f64) -> f64;
    }

    struct SquareArea;
    struct CircleArea;

    impl Area for SquareArea {
        fn area(&self, size: f64) -> f64 {
            size * size
        }
    }

    impl Area for CircleArea {
        fn area(&self, size: f64) -> f64 {
            std::f64::consts::PI * size * size
        }
    }

    impl Strategy for dyn Area {
        type Input = f64;
        type Output = f64;

        fn compute(&self, size: f64) -> f64 {
            self.area(size)
        }
    }

    #[test]
    fn test_enum_keys_and_trait_objects() {
        let mut registry: StrategyRegistry<Shape, dyn Area> = StrategyRegistry::new();
        registry
            .register(Shape::Square, || -> Box<dyn Area> { Box::new(SquareArea) })
            .unwrap();
        registry
            .register(Shape::Circle, || -> Box<dyn Area> { Box::new(CircleArea) })
            .unwrap();

        assert_eq!(registry.dispatch(&Shape::Square, 3.0), Ok(9.0));
        let circle = registry.dispatch(&Shape::Circle, 1.0).unwrap();
        assert!((circle - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(format!("{:?}", registry), "StrategyRegistry { keys: [\"circle\", \"square\"] }");
    }
}
