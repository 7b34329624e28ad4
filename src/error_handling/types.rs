//! Error type definitions.
//!
//! This module defines the error types surfaced by redirect resolution and by
//! application initialization.

use log::SetLoggerError;
use reqwest::header::InvalidHeaderValue;
use reqwest::Error as ReqwestError;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};
use thiserror::Error;

use crate::resolve::HopRecord;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured User-Agent is not a valid header value.
    #[error("Invalid User-Agent header: {0}")]
    InvalidUserAgent(#[from] InvalidHeaderValue),
}

/// Failure reported by the HTTP transport collaborator.
///
/// Connect failures, timeouts and body read errors all land here and are
/// passed to the caller unmodified.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Error raised by the reqwest-based transport.
    #[error("HTTP transport error: {0}")]
    Http(#[from] ReqwestError),

    /// Error raised by any other transport implementation.
    #[error("transport error: {0}")]
    Other(String),
}

/// Terminal errors of a redirect resolution.
///
/// None of these are retried internally.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The start URL or a redirect target could not be parsed as a URI.
    #[error("invalid url: {url} ({reason})")]
    InvalidUrl {
        /// The raw text that failed to parse
        url: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The URL scheme is neither `http` nor `https`.
    #[error("unsupported scheme '{scheme}' in {url}")]
    UnsupportedScheme {
        /// The absolute URL carrying the scheme
        url: String,
        /// The offending scheme
        scheme: String,
    },

    /// A redirect response arrived without a usable `location` header.
    #[error("location is empty for {status} redirect from {url}")]
    EmptyLocation {
        /// The URL that answered with the redirect
        url: String,
        /// The redirect status code
        status: u16,
    },

    /// The redirect target was already visited in this chain.
    #[error("redirect loop detected at {location}")]
    RedirectLoop {
        /// The resolved, absolute redirect target
        location: String,
    },

    /// More hops were visited than the caller allowed.
    #[error("max redirects count reached ({hops} hops visited, limit {max_redirects})")]
    MaxRedirectsExceeded {
        /// The caller-supplied bound
        max_redirects: usize,
        /// Chain length when the bound was crossed
        hops: usize,
    },

    /// Network or connection failure from the transport.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Kind of a [`ResolveError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, DisplayMacro)]
#[allow(clippy::enum_variant_names)] // Names mirror the user-facing error kinds
pub enum ErrorKind {
    /// See [`ResolveError::InvalidUrl`]
    InvalidUrlError,
    /// See [`ResolveError::UnsupportedScheme`]
    UnsupportedSchemeError,
    /// See [`ResolveError::EmptyLocation`]
    EmptyLocationError,
    /// See [`ResolveError::RedirectLoop`]
    RedirectLoopError,
    /// See [`ResolveError::MaxRedirectsExceeded`]
    MaxRedirectsExceededError,
    /// See [`ResolveError::Transport`]
    TransportError,
}

impl ResolveError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::InvalidUrl { .. } => ErrorKind::InvalidUrlError,
            ResolveError::UnsupportedScheme { .. } => ErrorKind::UnsupportedSchemeError,
            ResolveError::EmptyLocation { .. } => ErrorKind::EmptyLocationError,
            ResolveError::RedirectLoop { .. } => ErrorKind::RedirectLoopError,
            ResolveError::MaxRedirectsExceeded { .. } => ErrorKind::MaxRedirectsExceededError,
            ResolveError::Transport(_) => ErrorKind::TransportError,
        }
    }
}

/// A failed whole-body resolution together with the chain observed up to the
/// failure point.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct ResolutionFailure {
    /// The error that ended the resolution
    #[source]
    pub error: ResolveError,
    /// Hops visited before the failure
    pub chain: Vec<HopRecord>,
}

impl ResolutionFailure {
    /// Returns the kind of the underlying error.
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}
