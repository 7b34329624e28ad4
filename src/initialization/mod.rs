//! Application initialization and resource setup.
//!
//! This module provides functions to initialize:
//! - The logger (plain or JSON output)
//! - Per-hop HTTP clients
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_hop_client;
pub use logger::init_logger_with;
