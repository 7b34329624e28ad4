//! Configuration constants.
//!
//! This module defines the constants used while resolving redirect chains:
//! default ports, the redirect status codes we follow, and transport defaults.

/// Default User-Agent sent with every hop.
///
/// Some shorteners answer requests without a browser-like User-Agent with an
/// error page instead of a redirect, so a minimal Mozilla token is always sent.
/// Can be overridden with the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Default hop bound used by the CLI when `--max-redirects` is not given.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Per-request timeout in seconds applied by the transport.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Port used for `http` URLs without an explicit port.
pub const HTTP_DEFAULT_PORT: u16 = 80;
/// Port used for `https` URLs without an explicit port.
pub const HTTPS_DEFAULT_PORT: u16 = 443;

/// Status codes treated as redirects: 301, 302, 303 and 307.
///
/// 308 is deliberately absent; a 308 response is terminal.
pub const REDIRECT_STATUS_CODES: [u16; 4] = [301, 302, 303, 307];

/// Maximum start URL length (2048 characters).
/// This matches common browser and server limits (e.g., IE, Apache, Nginx default limits).
pub const MAX_URL_LENGTH: usize = 2048;
