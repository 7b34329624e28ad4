//! Error handling.
//!
//! This module provides:
//! - The resolution error type and its kinds
//! - The transport error passed through from the HTTP collaborator
//! - Initialization errors for logger and client setup
//!
//! Every resolution error is terminal: nothing is retried inside the crate.

mod types;

// Re-export public API
pub use types::{ErrorKind, InitializationError, ResolutionFailure, ResolveError, TransportError};
