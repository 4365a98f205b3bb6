//! Logger setup shared by the CLI and the WASM module.
//!
//! The library itself only emits through the `log` facade; binaries and the
//! browser glue pick the backend here.

/// Initialize logging for crossgrid.
///
/// # Behavior
/// - **Native (CLI):** `env_logger` at `Debug` if `debug_enabled`, else `Info`;
///   an explicit `RUST_LOG` overrides either.
/// - **WASM:** `console_log` at `Debug` if `debug_enabled`, else `Info`.
///
/// Calling this twice is harmless: the second initialization is ignored.
pub fn init_logger(debug_enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_enabled { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            // already initialized, or no console: keep going without logs
            let msg = format!("crossgrid: console logging unavailable: {e}");
            web_sys::console::warn_1(&msg.into());
            return;
        }
        log::info!("WASM logger initialized at {level:?} level");
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let level = if debug_enabled { log::LevelFilter::Debug } else { log::LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter(None, level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(spec) = std::env::var("RUST_LOG") {
            builder.parse_filters(&spec);
        }

        if builder.try_init().is_ok() {
            log::debug!("native logger initialized at {level:?} level");
        }
    }
}
