// src/log.rs
use std::path::Path;
use std::sync::OnceLock;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::consts::LOG_FILE;

static GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber: stderr (filtered by `RUST_LOG`, default `info`)
/// plus a non-blocking file layer at `<dir>/debug.log`.
/// Calling it twice is harmless; the second call is ignored.
/// An unusable log file is an error, not a panic.
pub fn init(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    crate::file::ensure_directory(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)?;

    if GUARD.get().is_some() {
        return Ok(());
    }
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let stderr_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registered = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(stderr_filter))
        .with(fmt::layer().with_ansi(false).with_writer(writer).with_filter(EnvFilter::new("debug")))
        .try_init();

    if registered.is_ok() {
        // Keep the worker alive for the process lifetime or buffered lines are lost.
        let _ = GUARD.set(guard);
    }
    Ok(())
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
