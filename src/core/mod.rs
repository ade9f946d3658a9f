pub mod batch;
pub mod config;
pub mod errors;
pub mod registry;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;
