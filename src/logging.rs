//! Logger setup shared by the demo binaries.

use env_logger::{Builder, Env};

/// Logger builder that honours `RUST_LOG`, falling back to `info`
pub fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format_timestamp(None);
    builder
}

/// Install the logger built by [`builder`]
pub fn init() {
    builder().init();
}
