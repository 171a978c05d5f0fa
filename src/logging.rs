//! File-based logging setup.
//!
//! The TUI owns stdout, so all log output goes to daily rolling files in
//! `Config::log_dir`: `job-organizer.<date>.log` for everything that passes
//! the filter and `error.<date>.log` for errors only.

use color_eyre::eyre::WrapErr;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::Config;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` overrides `Config::log_level` when set. The returned guard
/// flushes buffered lines on drop and must be held for the program's lifetime.
pub fn init_logging(config: &Config) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir).wrap_err_with(|| {
        format!("Failed to create log directory {}", config.log_dir.display())
    })?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level_filter(&config.log_level));

    let main_file = tracing_appender::rolling::daily(&config.log_dir, "job-organizer.log");
    let (main_writer, guard) = tracing_appender::non_blocking(main_file);
    let error_file = tracing_appender::rolling::daily(&config.log_dir, "error.log");

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(main_writer)
        .with_ansi(false)
        .with_target(true);

    let error_layer = tracing_subscriber::fmt::layer()
        .with_writer(error_file)
        .with_ansi(false)
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(main_layer)
        .with(error_layer)
        .try_init()
        .wrap_err("Failed to install tracing subscriber")?;

    tracing::info!(
        environment = config.environment.as_str(),
        api_base_url = %config.api_base_url,
        log_level = %config.log_level,
        "Logging initialized"
    );

    Ok(guard)
}

/// Build a filter from a level name such as `DEBUG` or `info`.
///
/// Unknown names fall back to `info`.
pub fn level_filter(level: &str) -> EnvFilter {
    let level = level
        .trim()
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);
    EnvFilter::default().add_directive(level.into())
}
