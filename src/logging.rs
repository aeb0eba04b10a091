//! Logging setup
//!
//! Native: `env_logger` behind the `log` facade, filtered by `RUST_LOG`
//! (defaults to `info`), plus crashlog for panics.
//! WASM: no logger is installed; macroquad's JS bundle has no console bridge
//! for `log`, so records are dropped. Panics still show in the browser console.

/// Initialize logging. Call once, first thing in main.
pub fn init() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

        let env = env_logger::Env::default().default_filter_or("info");
        // try_init: a second call (tests, hot restart) keeps the first logger
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp_millis()
            .try_init();
    }
}
