//! Single-hop execution.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error_handling::ResolveError;
use crate::resolve::chain::Chain;
use crate::resolve::uri::HopTarget;
use crate::transport::{HopRequest, HopResponse, Transport};

/// Issues the GET for one hop and returns the response head with its
/// unread body.
///
/// Transport failures are returned as `ResolveError::Transport` and are not
/// retried.
pub(crate) async fn execute_hop(
    transport: &dyn Transport,
    target: &HopTarget,
    user_agent: &HeaderValue,
    chain: &Chain,
) -> Result<HopResponse, ResolveError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, user_agent.clone());

    let request = HopRequest {
        host: target.host.clone(),
        port: target.port,
        request_target: target.request_target.clone(),
        tls: target.tls,
        headers,
    };

    let hop = chain.len();
    debug!("Hop {}: GET {}", hop, target.url);

    let response = transport.issue_get(request).await.map_err(|e| {
        debug!("Hop {}: transport failure for {}: {}", hop, target.url, e);
        ResolveError::Transport(e)
    })?;

    debug!("Hop {}: {} from {}", hop, response.status, target.url);
    Ok(response)
}
