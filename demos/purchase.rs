use patternkit::patterns::tax::{Purchaser, TaxTable};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    patternkit::logging::init();

    let registry = TaxTable::default().build_registry()?;
    let purchaser = Purchaser::new();

    for destination in ["uk", "eu", "us"] {
        let total = purchaser.purchase_for(&registry, destination, 100.0)?;
        println!("{}", total);
    }
    Ok(())
}
