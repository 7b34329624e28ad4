//! reqwest-backed transport.

use futures::future::BoxFuture;
use futures::{StreamExt, TryStreamExt};
use log::trace;

use crate::config::TransportConfig;
use crate::error_handling::TransportError;
use crate::initialization::init_hop_client;
use crate::transport::{HopRequest, HopResponse, Transport};

/// Production transport built on `reqwest`.
///
/// A fresh client is built for every hop, so TLS settings follow the hop's
/// scheme and no pooled connection is carried from one hop to the next.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    config: TransportConfig,
}

impl ReqwestTransport {
    /// Creates a transport with the given settings.
    pub fn new(config: TransportConfig) -> Self {
        Self { config }
    }
}

impl Transport for ReqwestTransport {
    fn issue_get(&self, request: HopRequest) -> BoxFuture<'_, Result<HopResponse, TransportError>> {
        Box::pin(async move {
            let client = init_hop_client(request.tls, &self.config)?;
            let url = request.url();
            trace!("GET {} (tls: {})", url, request.tls);

            let response = client.get(&url).headers(request.headers).send().await?;

            let status = response.status().as_u16();
            let headers = response.headers().clone();
            // The response owns the connection; dropping the stream releases it.
            let body = response
                .bytes_stream()
                .map_err(TransportError::from)
                .boxed();

            Ok(HopResponse {
                status,
                headers,
                body,
            })
        })
    }
}
