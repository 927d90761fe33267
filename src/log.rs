// src/log.rs
//
// Call sites use the short logf!/logd!/logw!/loge! macros; the events go
// through `tracing` into `.store/debug.log`.

use std::fs;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::{LOG_DIR, LOG_FILE};

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the file logger. Safe to call more than once; later calls are no-ops.
/// If the log directory can't be created we log to stderr instead.
pub fn init() {
    if GUARD.get().is_some() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if fs::create_dir_all(LOG_DIR).is_ok() {
        let appender = tracing_appender::rolling::never(LOG_DIR, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(false);
        if tracing_subscriber::registry().with(filter).with(layer).try_init().is_ok() {
            let _ = GUARD.set(guard);
        }
    } else {
        let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
        let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
    }
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
