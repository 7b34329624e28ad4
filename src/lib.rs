//! unshorten library: redirect chain resolution for shortened URLs
//!
//! This library follows a URL through its redirect responses one hop at a
//! time, recording every visited URL and its status code, until a
//! non-redirect response is reached. Redirect loops, overlong chains and
//! redirects without a usable `location` header are rejected.
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use unshorten::{RedirectResolver, TransportConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = RedirectResolver::from_config(TransportConfig::default())?;
//!
//! let mut body = resolver.resolve_stream("http://t.co/abc", 5);
//! let chain = body.chain_handle();
//! while let Some(chunk) = body.next().await {
//!     println!("{} bytes", chunk?.len());
//! }
//! for hop in chain.hops() {
//!     println!("{} -> {:?}", hop.url, hop.status_code);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime when used with the default
//! reqwest-backed transport.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod resolve;
pub mod transport;

// Re-export public API
pub use config::{LogFormat, LogLevel, TransportConfig};
pub use error_handling::{ErrorKind, ResolutionFailure, ResolveError, TransportError};
pub use resolve::{Chain, HopRecord, RedirectResolver, ResolutionStream, ResolvedBody};
pub use transport::{ReqwestTransport, Transport};
