use crate::cli::Args;
use nameparse::{AppError, Config};
use std::fs;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Sets up logging configuration for the application.
///
/// Logs always go to a daily-rolling file; with `--debug` they are mirrored
/// to stdout as well. The log location is resolved from the `--log-file`
/// flag, then the config file, then the default directory under the platform
/// config dir (created if missing).
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub fn setup_logging(args: &Args) -> Result<(String, WorkerGuard), AppError> {
    let config_log_path = Config::load().ok().and_then(|config| config.log_file_path);

    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("nameparse.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), "nameparse.log".to_string()),
    };

    if !Path::new(&log_dir).exists() {
        fs::create_dir_all(&log_dir).map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    // Daily rolling appender; the guard keeps the non-blocking writer alive
    // so buffered lines are flushed on exit.
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::from_default_env().add_directive(
        "nameparse=info"
            .parse()
            .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?,
    );

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter),
    );

    if args.debug {
        let stdout_filter = EnvFilter::from_default_env().add_directive(
            "nameparse=debug"
                .parse()
                .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?,
        );
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(stdout_filter),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
