use std::io;

use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

use crate::enums::LogLevel;

static LOGGER_INIT: OnceCell<LogLevel> = OnceCell::new();

/// Installs the global `tracing` subscriber once. `RUST_LOG`, when set, wins over `level`.
pub fn init_logger(level: LogLevel) {
    LOGGER_INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

        let subscriber = fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_ansi(false)
            .finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("global subscriber already installed by the host");
        } else {
            tracing::info!(level = level.as_str(), "Bunner cookie cutter logger initialized.");
        }

        level
    });
}

/// Level passed to the first [`init_logger`] call, if any.
pub fn installed_level() -> Option<LogLevel> {
    LOGGER_INIT.get().copied()
}
