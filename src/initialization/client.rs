//! HTTP client initialization.
//!
//! This module builds the short-lived clients used for individual hops.

use reqwest::ClientBuilder;

use crate::config::TransportConfig;

/// Initializes the HTTP client for a single hop.
///
/// Creates a `reqwest::Client` configured with:
/// - Automatic redirects disabled (the resolver follows them manually)
/// - No idle connection pooling, so the connection ends with the hop
/// - Timeout from the transport settings
/// - Trust-all certificate validation for TLS hops when the settings allow it
///
/// # Arguments
///
/// * `tls` - Whether this hop is an `https` request
/// * `config` - Transport settings
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_hop_client(
    tls: bool,
    config: &TransportConfig,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .pool_max_idle_per_host(0)
        .timeout(config.timeout)
        .danger_accept_invalid_certs(tls && config.accept_invalid_certs)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_hop_client_plaintext() {
        let config = TransportConfig::default();
        assert!(init_hop_client(false, &config).is_ok());
    }

    #[test]
    fn test_init_hop_client_tls() {
        let config = TransportConfig::default();
        assert!(init_hop_client(true, &config).is_ok());
    }
}
