//! File-only logging
//!
//! The TUI owns stdout and stderr while it runs, so log output goes to a daily
//! rolling file in the system temp directory instead. `RUST_LOG` overrides the
//! default `info` level.

use std::{env, fs, io, path::PathBuf};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber writing to `<tmp>/<component>-logs/`.
///
/// Returns the log directory and the appender guard. Keep the guard alive for
/// the life of the program or buffered lines are lost on exit.
pub fn init_file_only_logging(component_name: &str) -> io::Result<(PathBuf, WorkerGuard)> {
    let log_dir = env::temp_dir().join(format!("{}-logs", component_name));
    fs::create_dir_all(&log_dir)?;

    let file_appender = rolling::daily(&log_dir, format!("{}.log", component_name));
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_writer(writer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| io::Error::other(format!("failed to initialize logging: {}", e)))?;

    tracing::info!(
        component = component_name,
        log_dir = %log_dir.display(),
        "logging initialized"
    );

    Ok((log_dir, guard))
}
