use crate::error::{Result as ServerErrorResult, ServerError};

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Crates that log every statement or connection at `info`.
const NOISY_TARGETS: &[&str] = &["sqlx", "hyper", "tower_http"];

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogOutput {
    /// Appends to a file, with the source location on every line.
    File(PathBuf),
    /// Terminal with colored levels.
    ColoredStdout,
    /// Stdout without escape codes, prefixed with the log target.
    PlainStdout,
}

impl LogOutput {
    /// A configured file wins over stdout; `colored` only applies to stdout.
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if colored => Self::ColoredStdout,
            None => Self::PlainStdout,
        }
    }

    pub(crate) fn dispatch(&self) -> ServerErrorResult<Dispatch> {
        let dispatch = match self {
            Self::File(path) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| ServerError::Logger {
                        message: format!("Failed to open log file {}: {}", path.display(), e),
                    })?;

                Dispatch::new()
                    .format(|out, message, record| {
                        out.finish(format_args!(
                            "[{} - {}] {} [{}:{}]",
                            humantime::format_rfc3339(SystemTime::now()),
                            record.level(),
                            message,
                            record.file().unwrap_or("unknown"),
                            record.line().unwrap_or(0),
                        ))
                    })
                    .chain(file)
            }
            Self::ColoredStdout => {
                let colors = ColoredLevelConfig::new()
                    .trace(Color::Magenta)
                    .debug(Color::Blue)
                    .info(Color::Green)
                    .warn(Color::Yellow)
                    .error(Color::Red);

                Dispatch::new()
                    .format(move |out, message, record| {
                        out.finish(format_args!(
                            "[{} - {}] {}",
                            humantime::format_rfc3339(SystemTime::now()),
                            colors.color(record.level()),
                            message,
                        ))
                    })
                    .chain(std::io::stdout())
            }
            Self::PlainStdout => Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{} - {} {}] {}",
                        humantime::format_rfc3339(SystemTime::now()),
                        record.level(),
                        record.target(),
                        message,
                    ))
                })
                .chain(std::io::stdout()),
        };

        Ok(dispatch)
    }
}

impl std::fmt::Display for LogOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "file={}", path.display()),
            Self::ColoredStdout => f.write_str("stdout (colored)"),
            Self::PlainStdout => f.write_str("stdout"),
        }
    }
}

/// Install the global fern logger and the `tracing` bridge. Call once.
pub fn initialize(
    log_level: shop_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level = *log_level;
    let output = LogOutput::select(log_file, colored);

    NOISY_TARGETS
        .iter()
        .fold(Dispatch::new().level(level), |dispatch, target| {
            dispatch.level_for(*target, level.min(LevelFilter::Warn))
        })
        .chain(output.dispatch()?)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    info!("Logger initialized: level={level:?}, {output}");

    tracing_log::LogTracer::init().ok();

    Ok(())
}
