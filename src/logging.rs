//! Log file setup
//!
//! The form owns the terminal in raw mode, so log lines go to a file in the
//! platform data directory instead of stderr.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the log directory
pub const LOG_FILE_NAME: &str = "contact-tui.log";

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "contact_tui=info";

/// Directory that holds the log file
pub fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "contact", "contact-tui").map(|dirs| dirs.data_local_dir().to_path_buf())
}

/// Open a non-blocking writer appending to `dir/contact-tui.log`
///
/// The returned guard flushes pending lines when dropped.
pub fn file_writer(dir: &Path) -> std::io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber
///
/// Without a usable log directory, logging is disabled rather than written
/// over the terminal.
pub fn init() -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    let writer = log_dir().and_then(|dir| match file_writer(&dir) {
        Ok(writer) => Some(writer),
        Err(e) => {
            eprintln!(
                "Warning: Could not create log directory {}: {e}",
                dir.display()
            );
            None
        }
    });

    let (layer, guard) = match writer {
        Some((non_blocking, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry().with(filter).with(layer).init();

    guard
}
