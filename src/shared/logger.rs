use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system. Hosts embedding the core call this once at
/// startup; repeated calls are no-ops, so tests may call it freely.
pub fn init() {
    INIT.call_once(|| {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .filter_module("anikore", log::LevelFilter::Debug)
            .filter_module("diesel", log::LevelFilter::Warn)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .init();

        log::info!("Logging system initialized");
    });
}
