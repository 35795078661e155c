use std::sync::Once;

use cfg_if::cfg_if;

static INIT: Once = Once::new();

/// Initializes the global logger. Subsequent calls are no-ops.
pub fn init_logger() {
    INIT.call_once(init);
}

cfg_if! {
    if #[cfg(feature = "flexi_logger")] {
        const LOG_ENV: &str = "valeq=info";

        fn init() {
            flexi_logger::Logger::try_with_env_or_str(LOG_ENV)
                .expect("Failed to initialize logger")
                .start()
                .expect("Failed to start logger");
            log::info!("Logger initialized! (Using flexi_logger) {LOG_ENV}");
        }
    } else {
        fn init() {}
    }
}
