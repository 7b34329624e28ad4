//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and for configuring the HTTP transport.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Settings for the production HTTP transport.
///
/// The hop bound and start URL are not part of this struct: they are passed
/// explicitly to every resolve call.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use unshorten::TransportConfig;
///
/// let config = TransportConfig {
///     timeout: Duration::from_secs(5),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// HTTP User-Agent header value sent with every hop
    pub user_agent: String,

    /// Per-request timeout; a timed out hop surfaces as a transport error
    pub timeout: Duration,

    /// Trust any certificate presented on `https` hops
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: true,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Resolve with the default bound of 5 hops
/// unshorten http://t.co/Oj3GYaGzER
///
/// # Allow longer chains and dump the final body
/// unshorten http://bit.ly/xyz --max-redirects 10 --print-body
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "unshorten",
    about = "Follows a shortened URL through its redirect chain to the final destination."
)]
pub struct Opt {
    /// URL to resolve
    #[arg(value_parser)]
    pub url: String,

    /// Maximum number of hops visited before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    pub max_redirects: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Write the final response body to stdout
    #[arg(long)]
    pub print_body: bool,
}

impl Opt {
    /// Builds the transport settings from the CLI flags.
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            user_agent: self.user_agent.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            accept_invalid_certs: true,
        }
    }
}
