use log::LevelFilter;

/// Initialize the logger with the given level.
///
/// `RUST_LOG` is still honoured for per-module filters.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp_millis()
        .init();
}
