//! HTTP transport seam.
//!
//! The resolver only needs to issue a single GET per hop and observe the
//! status code, headers and a lazily streamed body. [`Transport`] captures that
//! contract; [`ReqwestTransport`] is the production implementation.

mod header;
mod http;

use bytes::Bytes;
use futures::future::BoxFuture;
use futures::stream::BoxStream;
use reqwest::header::HeaderMap;

use crate::error_handling::TransportError;

pub use header::header_text;
pub use http::ReqwestTransport;

/// Lazily streamed response body.
pub type BodyStream = BoxStream<'static, Result<Bytes, TransportError>>;

/// One GET request against a resolved host, port and request target.
#[derive(Debug, Clone)]
pub struct HopRequest {
    /// Host name or IP literal (IPv6 literals keep their brackets)
    pub host: String,
    /// Resolved port (explicit or scheme default)
    pub port: u16,
    /// Raw path, query and fragment, percent-encoding preserved
    pub request_target: String,
    /// Whether the request goes over TLS
    pub tls: bool,
    /// Request headers to send
    pub headers: HeaderMap,
}

impl HopRequest {
    /// Absolute URL text for transports that take a full URL.
    pub fn url(&self) -> String {
        let scheme = if self.tls { "https" } else { "http" };
        format!(
            "{}://{}:{}{}",
            scheme, self.host, self.port, self.request_target
        )
    }
}

/// Response head and body of one hop.
pub struct HopResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers; lookups are case-insensitive
    pub headers: HeaderMap,
    /// Body, not yet read
    pub body: BodyStream,
}

impl HopResponse {
    /// Looks up a header by name (case-insensitive) and decodes it as text.
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name).map(header_text)
    }
}

impl std::fmt::Debug for HopResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HopResponse")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .finish_non_exhaustive()
    }
}

/// Issues one HTTP GET per hop.
///
/// Implementations must not follow redirects themselves, and must scope any
/// connection to the returned response: once the body stream is drained,
/// errors or is dropped, the connection is released.
pub trait Transport: Send + Sync {
    /// Sends `request` and resolves once response headers are available.
    fn issue_get(&self, request: HopRequest) -> BoxFuture<'_, Result<HopResponse, TransportError>>;
}
