//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default ports, redirect codes, timeouts)
//! - Transport settings
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{LogFormat, LogLevel, Opt, TransportConfig};
