//! Redirect chain resolution.
//!
//! This module provides:
//! - URI resolution of absolute and relative redirect targets
//! - Redirect classification by status code
//! - The per-resolution chain of visited hops
//! - The resolver state machine and its streaming and buffered entry points

mod chain;
mod classify;
mod executor;
mod resolver;
mod uri;


// Re-export public API
pub use chain::{Chain, HopRecord};
pub use classify::{classify_status, HopClass};
pub use resolver::{RedirectResolver, ResolutionStream, ResolvedBody};
pub use uri::{request_target, resolve_reference, HopTarget};
