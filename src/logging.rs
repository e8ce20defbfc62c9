//! Logging setup.
//!
//! The interactive menus own stdout, so log events go to a file. `--debug`
//! adds a stderr layer at debug level.

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{error::StatsError, Result};

const LOG_FILE_NAME: &str = "nba-stats.log";

/// Path: <cache dir>/nba-stats/nba-stats.log
pub fn default_log_path() -> PathBuf {
    let base = dirs::cache_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".cache");
        home
    });
    base.join("nba-stats").join(LOG_FILE_NAME)
}

/// Split a log path into its directory and file name, creating the directory.
fn prepare_log_path(path: &Path) -> Result<(PathBuf, String)> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(LOG_FILE_NAME)
        .to_string();

    std::fs::create_dir_all(&dir).map_err(|e| StatsError::LogSetup {
        message: format!("failed to create log directory {}: {e}", dir.display()),
    })?;

    Ok((dir, file_name))
}

fn env_filter(default_directive: &str) -> Result<EnvFilter> {
    let directive = default_directive
        .parse()
        .map_err(|e| StatsError::LogSetup {
            message: format!("invalid log directive '{default_directive}': {e}"),
        })?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Install the global subscriber. Keep the returned guard alive until exit so
/// buffered events are flushed.
pub fn setup_logging(log_file: Option<&Path>, debug: bool) -> Result<(PathBuf, WorkerGuard)> {
    let path = log_file.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let (dir, file_name) = prepare_log_path(&path)?;

    let file_appender = tracing_appender::rolling::never(&dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::Layer::new()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(env_filter("nba_stats=info")?);

    let stderr_layer = debug.then(|| {
        fmt::Layer::new()
            .with_writer(std::io::stderr)
            .with_filter(EnvFilter::new("nba_stats=debug"))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| StatsError::LogSetup {
            message: e.to_string(),
        })?;

    Ok((dir.join(file_name), guard))
}
