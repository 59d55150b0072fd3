//! Logging setup for binaries

/// Initialize the logger for terminal use. Defaults to INFO; the RUST_LOG
/// environment variable overrides it.
pub fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_micros()
        .init();
}
