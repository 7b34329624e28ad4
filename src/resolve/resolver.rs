//! Redirect chain resolution.
//!
//! Follows redirect responses one hop at a time until a terminal response is
//! reached, recording every visited URL in a [`Chain`].
//!
//! For every hop response the checks run in this order:
//!
//! 1. classify the status (301, 302, 303 and 307 are redirects)
//! 2. a redirect without a non-blank `location` fails with `EmptyLocation`
//! 3. a redirect whose resolved target was already visited fails with
//!    `RedirectLoop`
//! 4. if the chain (current hop included) is longer than the bound, fail with
//!    `MaxRedirectsExceeded`, for terminal responses too
//! 5. record the status code on the current hop
//! 6. on a redirect, append the target and request it
//! 7. otherwise the response body is the result
//!
//! A bound of `n` therefore permits at most `n` visited hops.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::{Bytes, BytesMut};
use futures::stream::{self, BoxStream, Stream};
use futures::{future, StreamExt, TryStreamExt};
use log::{debug, info};
use reqwest::header::{HeaderValue, LOCATION};
use url::Url;

use crate::config::{TransportConfig, DEFAULT_USER_AGENT, MAX_URL_LENGTH};
use crate::error_handling::{InitializationError, ResolutionFailure, ResolveError};
use crate::resolve::chain::{Chain, HopRecord};
use crate::resolve::classify::{classify_status, HopClass};
use crate::resolve::executor::execute_hop;
use crate::resolve::uri::{resolve_reference, HopTarget};
use crate::transport::{BodyStream, ReqwestTransport, Transport};

/// Resolves shortened URLs by following their redirect chains.
///
/// The resolver itself holds no per-resolution state: every call starts a
/// fresh resolution with its own [`Chain`], so independent resolutions can run
/// concurrently.
///
/// # Example
///
/// ```no_run
/// use unshorten::{RedirectResolver, TransportConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = RedirectResolver::from_config(TransportConfig::default())?;
/// let resolved = resolver.resolve_whole_body("http://t.co/abc", 5).await?;
/// for hop in &resolved.chain {
///     println!("{} {:?}", hop.url, hop.status_code);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RedirectResolver {
    transport: Arc<dyn Transport>,
    user_agent: HeaderValue,
}

impl RedirectResolver {
    /// Creates a resolver over the given transport, sending the default
    /// `Mozilla/5.0` User-Agent.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            user_agent: HeaderValue::from_static(DEFAULT_USER_AGENT),
        }
    }

    /// Creates a resolver backed by [`ReqwestTransport`].
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidUserAgent` if the configured
    /// User-Agent is not a valid header value.
    pub fn from_config(config: TransportConfig) -> Result<Self, InitializationError> {
        let user_agent = config.user_agent.clone();
        Self::new(Arc::new(ReqwestTransport::new(config))).with_user_agent(&user_agent)
    }

    /// Replaces the User-Agent sent with every hop.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::InvalidUserAgent` if `user_agent` is not
    /// a valid header value.
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self, InitializationError> {
        self.user_agent = HeaderValue::from_str(user_agent)?;
        Ok(self)
    }

    /// Starts resolving `start_url`, visiting at most `max_redirects` hops.
    ///
    /// Nothing happens until the returned stream is polled. It yields the
    /// terminal response's body as it arrives and ends when the body is
    /// drained, or yields a single error and ends. Dropping the stream cancels
    /// the resolution: the in-flight hop's connection is released and no
    /// further hop is requested.
    pub fn resolve_stream(&self, start_url: &str, max_redirects: usize) -> ResolutionStream {
        let chain = Chain::new();
        let run = HopRun {
            transport: Arc::clone(&self.transport),
            user_agent: self.user_agent.clone(),
            chain: chain.clone(),
            start_url: start_url.to_string(),
            max_redirects,
        };

        let inner = stream::once(run.drive())
            .map(|outcome| match outcome {
                Ok(body) => body.map_err(ResolveError::from).left_stream(),
                Err(e) => {
                    stream::once(future::ready(Err::<Bytes, ResolveError>(e))).right_stream()
                }
            })
            .flatten()
            .boxed();

        ResolutionStream { chain, inner }
    }

    /// Resolves `start_url` and buffers the whole terminal body.
    ///
    /// Built on [`resolve_stream`](Self::resolve_stream); the only difference
    /// is the accumulation.
    ///
    /// # Errors
    ///
    /// Returns a `ResolutionFailure` carrying the error and the chain observed
    /// up to the failure point.
    pub async fn resolve_whole_body(
        &self,
        start_url: &str,
        max_redirects: usize,
    ) -> Result<ResolvedBody, ResolutionFailure> {
        let stream = self.resolve_stream(start_url, max_redirects);
        let chain = stream.chain_handle();

        match stream.into_body().await {
            Ok(body) => Ok(ResolvedBody {
                body,
                chain: chain.hops(),
            }),
            Err(error) => Err(ResolutionFailure {
                error,
                chain: chain.hops(),
            }),
        }
    }
}

impl std::fmt::Debug for RedirectResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectResolver")
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

/// Buffered result of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBody {
    /// Full body of the terminal response
    pub body: Bytes,
    /// Every visited hop, in order, each with its status code
    pub chain: Vec<HopRecord>,
}

impl ResolvedBody {
    /// URL of the terminal hop.
    pub fn final_url(&self) -> Option<&str> {
        self.chain.last().map(|hop| hop.url.as_str())
    }
}

/// Lazy body stream of one resolution.
///
/// Can be iterated once. [`chain_handle`](Self::chain_handle) returns a handle
/// to the hops visited so far; it stays readable after the stream finishes,
/// fails or is dropped.
pub struct ResolutionStream {
    chain: Chain,
    inner: BoxStream<'static, Result<Bytes, ResolveError>>,
}

impl ResolutionStream {
    /// Handle to this resolution's chain.
    ///
    /// ```no_run
    /// use futures::StreamExt;
    /// use unshorten::{RedirectResolver, TransportConfig};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let resolver = RedirectResolver::from_config(TransportConfig::default())?;
    /// let mut stream = resolver.resolve_stream("http://t.co/abc", 5);
    /// let chain = stream.chain_handle();
    /// while let Some(chunk) = stream.next().await {
    ///     chunk?;
    /// }
    /// println!("{} hops", chain.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn chain_handle(&self) -> Chain {
        self.chain.clone()
    }

    /// Drains the stream into one buffer.
    ///
    /// # Errors
    ///
    /// Returns the first error the stream yields.
    pub async fn into_body(self) -> Result<Bytes, ResolveError> {
        self.inner
            .try_fold(BytesMut::new(), |mut acc, chunk| async move {
                acc.extend_from_slice(&chunk);
                Ok::<_, ResolveError>(acc)
            })
            .await
            .map(BytesMut::freeze)
    }
}

impl Stream for ResolutionStream {
    type Item = Result<Bytes, ResolveError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.poll_next_unpin(cx)
    }
}

impl std::fmt::Debug for ResolutionStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolutionStream")
            .field("chain", &self.chain)
            .finish_non_exhaustive()
    }
}

/// Where to go after a hop's response has been accepted.
#[derive(Debug, PartialEq, Eq)]
enum NextHop {
    Follow(Url),
    Done,
}

/// State owned by one resolution while its hops run.
struct HopRun {
    transport: Arc<dyn Transport>,
    user_agent: HeaderValue,
    chain: Chain,
    start_url: String,
    max_redirects: usize,
}

impl HopRun {
    /// Runs hops until a terminal response, returning its unread body.
    async fn drive(self) -> Result<BodyStream, ResolveError> {
        if self.start_url.len() > MAX_URL_LENGTH {
            return Err(ResolveError::InvalidUrl {
                url: format!("{}...", self.start_url.chars().take(50).collect::<String>()),
                reason: format!("exceeds maximum length of {} characters", MAX_URL_LENGTH),
            });
        }

        let mut current = resolve_reference(&self.start_url, None)?;
        self.chain.push(current.to_string());

        loop {
            let target = HopTarget::from_url(&current)?;
            let response = execute_hop(
                self.transport.as_ref(),
                &target,
                &self.user_agent,
                &self.chain,
            )
            .await?;
            let location = response.header(LOCATION.as_str());

            match accept_response(
                &self.chain,
                &current,
                response.status,
                location.as_deref(),
                self.max_redirects,
            ) {
                Ok(NextHop::Follow(next)) => {
                    debug!("Following {} redirect: {} -> {}", response.status, current, next);
                    // Dropping the unread response releases this hop's connection.
                    drop(response);
                    self.chain.push(next.to_string());
                    current = next;
                }
                Ok(NextHop::Done) => {
                    info!(
                        "Resolved {} to {} after {} hop(s)",
                        self.start_url,
                        current,
                        self.chain.len()
                    );
                    return Ok(response.body);
                }
                Err(e) => {
                    debug!("Resolution of {} failed: {}", self.start_url, e);
                    return Err(e);
                }
            }
        }
    }
}

/// Applies the redirect checks to one hop's response.
///
/// On success the hop's status code has been recorded in `chain`.
fn accept_response(
    chain: &Chain,
    current: &Url,
    status: u16,
    location: Option<&str>,
    max_redirects: usize,
) -> Result<NextHop, ResolveError> {
    let next = match classify_status(status) {
        HopClass::Redirect => {
            let location = location
                .filter(|l| !l.trim().is_empty())
                .ok_or_else(|| ResolveError::EmptyLocation {
                    url: current.to_string(),
                    status,
                })?;
            let next = resolve_reference(location, Some(current))?;
            if chain.contains_url(next.as_str()) {
                return Err(ResolveError::RedirectLoop {
                    location: next.to_string(),
                });
            }
            NextHop::Follow(next)
        }
        HopClass::Terminal => NextHop::Done,
    };

    let hops = chain.len();
    if hops > max_redirects {
        return Err(ResolveError::MaxRedirectsExceeded {
            max_redirects,
            hops,
        });
    }

    chain.record_status(status);
    Ok(next)
}
