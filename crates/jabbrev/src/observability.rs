//! Logging and tracing initialization.
//!
//! Human-readable events go to stderr; when a log destination is configured
//! (via config or environment), a JSONL layer is added on top through a
//! non-blocking appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where log output should go, resolved from environment and config.
#[derive(Debug, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (`JABBREV_LOG_PATH`). Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Log directory (`JABBREV_LOG_DIR`, falling back to config `log_dir`).
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log destinations from the environment, with the config file's
    /// `log_dir` as fallback.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("JABBREV_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("JABBREV_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the log filter from CLI verbosity flags and the configured level.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces errors only and each
/// `-v` raises verbosity above the configured level.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Initialize the global tracing subscriber.
///
/// Returns the worker guard for the non-blocking file appender when file
/// logging is active; hold it for the life of the process so buffered events
/// are flushed on exit.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some((dir, file_name)) = log_destination(config)? else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let appender = rolling::never(&dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer().json().with_writer(non_blocking);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

/// Resolve the file logging destination, creating the directory if needed.
fn log_destination(config: &ObservabilityConfig) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(ref path) = config.log_path {
        let dir = path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
        let file_name = path
            .file_name()
            .with_context(|| format!("log path has no file name: {}", path.display()))?
            .to_string_lossy()
            .into_owned();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some((dir, file_name)));
    }

    if let Some(ref dir) = config.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        return Ok(Some((dir.clone(), "jabbrev.jsonl".to_string())));
    }

    Ok(None)
}
