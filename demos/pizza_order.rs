use patternkit::patterns::pizza::{FactoryPizzaStore, SimplePizzaFactory};
use patternkit::shell::run_pizza_order;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    patternkit::logging::init();

    let store = FactoryPizzaStore::new(SimplePizzaFactory::new()?);
    log::debug!("Menu: {:?}", store.factory().kinds());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_pizza_order(&store, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
