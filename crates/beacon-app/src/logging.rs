//! Tracing setup. Console output goes to stderr; stdout carries the host link.

use std::path::Path;
use std::time::{Duration, SystemTime};

use beacon_config::schema::LoggingConfig;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_FILE_NAME: &str = "beacon.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer and must be held until exit.
pub fn init(config: &LoggingConfig, level_override: Option<&str>) -> Option<WorkerGuard> {
    let directive = match level_override {
        Some(level) => format!("beacon={level}"),
        None => format!("beacon={}", config.level.as_directive()),
    };
    let env_filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .unwrap_or_else(|_| LevelFilter::INFO.into()),
    );

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr);

    let log_dir = config
        .file_logging
        .then(|| beacon_platform::log_dir().ok())
        .flatten();

    let (file_layer, guard) = match &log_dir {
        Some(dir) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE_NAME);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_ansi(false)
                    .with_writer(writer);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {e}");
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    if let (Some(dir), Some(_)) = (&log_dir, &guard) {
        tracing::info!("File logging enabled, log directory: {}", dir.display());
        let removed = cleanup_old_logs(dir, u64::from(config.keep_days));
        if removed > 0 {
            tracing::debug!("Removed {removed} old log files");
        }
    }

    guard
}

/// Delete rotated log files last modified more than `keep_days` ago.
/// Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &Path, keep_days: u64) -> usize {
    let Some(cutoff) =
        SystemTime::now().checked_sub(Duration::from_secs(keep_days * 24 * 60 * 60))
    else {
        return 0;
    };

    let entries = match std::fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read log directory for cleanup: {}", e);
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();

        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) if name.starts_with(LOG_FILE_NAME) && name != LOG_FILE_NAME => {}
            _ => continue,
        }

        let Ok(modified) = entry.metadata().and_then(|m| m.modified()) else {
            continue;
        };

        if modified < cutoff {
            match std::fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) => tracing::warn!("Failed to remove old log file {:?}: {}", path, e),
            }
        }
    }
    removed
}
