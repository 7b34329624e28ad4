//! Logger setup for the CLI.
//!
//! Hop tracing is logged under the `unshorten` target; HTTP stack crates are
//! capped at `info` so a `--log-level trace` run stays readable.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

/// Installs the global logger.
///
/// `RUST_LOG` is read first; `level` then applies to this crate and as the
/// default for everything else. Plain output is colored, JSON output is one
/// object per line with `ts` (Unix millis), `level`, `target` and `msg`.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// unshorten http://t.co/abc --log-level debug
/// RUST_LOG=unshorten=debug,reqwest=info unshorten http://t.co/abc
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter_level(level);
    for (module, cap) in [
        ("reqwest", LevelFilter::Info),
        ("hyper", LevelFilter::Info),
        ("hyper_util", LevelFilter::Info),
        ("rustls", LevelFilter::Warn),
    ] {
        builder.filter_module(module, cap);
    }
    builder.filter_module("unshorten", level);

    match format {
        LogFormat::Json => builder.format(write_json),
        LogFormat::Plain => builder.format(write_plain),
    };

    builder.try_init().map_err(InitializationError::from)
}

fn write_json(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    let line = json_line(
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        &record.args().to_string(),
    );
    writeln!(buf, "{}", line)
}

fn write_plain(buf: &mut Formatter, record: &Record<'_>) -> io::Result<()> {
    writeln!(
        buf,
        "{} [{}] {}",
        record.target().cyan(),
        colored_level(record.level()),
        record.args()
    )
}

fn json_line(ts: i64, level: Level, target: &str, msg: &str) -> String {
    serde_json::json!({
        "ts": ts,
        "level": level.as_str(),
        "target": target,
        "msg": msg,
    })
    .to_string()
}

fn colored_level(level: Level) -> ColoredString {
    let text = level.as_str();
    match level {
        Level::Error => text.red(),
        Level::Warn => text.yellow(),
        Level::Info => text.green(),
        Level::Debug => text.blue(),
        Level::Trace => text.purple(),
    }
}
