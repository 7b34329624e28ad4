//! URI resolution and request-target construction.

use url::{ParseError, Url};

use crate::config::{HTTPS_DEFAULT_PORT, HTTP_DEFAULT_PORT};
use crate::error_handling::ResolveError;

/// Resolves a raw URL or redirect target to an absolute URL.
///
/// Targets that carry a host are used as-is. Anything else is treated as a
/// reference relative to `base` and resolved per RFC 3986 §5 (path merge,
/// scheme and authority carried from the base, dot-segment removal).
///
/// # Errors
///
/// Returns `ResolveError::InvalidUrl` if `raw` cannot be parsed, or if it is
/// relative and there is no base to resolve it against.
pub fn resolve_reference(raw: &str, base: Option<&Url>) -> Result<Url, ResolveError> {
    let invalid = |e: ParseError| ResolveError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    };

    match Url::parse(raw) {
        Ok(url) if has_host(&url) => Ok(url),
        // Absolute but hostless (e.g. `mailto:`): joining leaves it unchanged,
        // and the scheme check rejects it before any request is issued.
        Ok(url) => match base {
            Some(base) => base.join(raw).map_err(invalid),
            None => Ok(url),
        },
        Err(ParseError::RelativeUrlWithoutBase) => match base {
            Some(base) => base.join(raw).map_err(invalid),
            None => Err(invalid(ParseError::RelativeUrlWithoutBase)),
        },
        Err(e) => Err(invalid(e)),
    }
}

fn has_host(url: &Url) -> bool {
    url.host_str().is_some_and(|host| !host.trim().is_empty())
}

/// Everything needed to issue the request for one hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HopTarget {
    /// The absolute URL of the hop
    pub url: Url,
    /// Host name or IP literal
    pub host: String,
    /// Explicit port, or the scheme default
    pub port: u16,
    /// Raw path, query and fragment
    pub request_target: String,
    /// `true` for `https`
    pub tls: bool,
}

impl HopTarget {
    /// Computes the transport parameters for an absolute URL.
    ///
    /// # Errors
    ///
    /// - `ResolveError::UnsupportedScheme` for anything but `http`/`https`
    /// - `ResolveError::InvalidUrl` if the URL has no host
    pub fn from_url(url: &Url) -> Result<Self, ResolveError> {
        let (tls, default_port) = match url.scheme() {
            "http" => (false, HTTP_DEFAULT_PORT),
            "https" => (true, HTTPS_DEFAULT_PORT),
            other => {
                return Err(ResolveError::UnsupportedScheme {
                    url: url.to_string(),
                    scheme: other.to_string(),
                })
            }
        };

        let host = match url.host_str() {
            Some(host) if !host.trim().is_empty() => host.to_string(),
            _ => {
                return Err(ResolveError::InvalidUrl {
                    url: url.to_string(),
                    reason: "missing host".to_string(),
                })
            }
        };

        Ok(Self {
            url: url.clone(),
            host,
            port: url.port().unwrap_or(default_port),
            request_target: request_target(url),
            tls,
        })
    }
}

/// Builds the request target: raw path, then `?query` and `#fragment` when
/// present and non-blank. Percent-encoding is kept exactly as serialized.
pub fn request_target(url: &Url) -> String {
    let mut target = url.path().to_string();
    if let Some(query) = url.query().filter(|q| !q.trim().is_empty()) {
        target.push('?');
        target.push_str(query);
    }
    if let Some(fragment) = url.fragment().filter(|f| !f.trim().is_empty()) {
        target.push('#');
        target.push_str(fragment);
    }
    target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ErrorKind;

    fn base(s: &str) -> Url {
        Url::parse(s).expect("valid base url")
    }

    #[test]
    fn test_absolute_target_used_as_is() {
        let b = base("http://a.example/x/y");
        let url = resolve_reference("https://bit.ly/xyz", Some(&b)).unwrap();
        assert_eq!(url.as_str(), "https://bit.ly/xyz");
    }

    #[test]
    fn test_absolute_path_reference() {
        let b = base("http://a.example/x/y");
        let url = resolve_reference("/z", Some(&b)).unwrap();
        assert_eq!(url.as_str(), "http://a.example/z");
    }

    #[test]
    fn test_relative_path_reference() {
        let b = base("http://a.example/x/y");
        let url = resolve_reference("z", Some(&b)).unwrap();
        assert_eq!(url.as_str(), "http://a.example/x/z");
    }

    #[test]
    fn test_relative_reference_keeps_query() {
        let b = base("https://a.example:8443/x/y");
        let url = resolve_reference("/foo?bar", Some(&b)).unwrap();
        assert_eq!(url.as_str(), "https://a.example:8443/foo?bar");
    }

    #[test]
    fn test_dot_segments_removed() {
        let b = base("http://a.example/x/y/z");
        let url = resolve_reference("../w", Some(&b)).unwrap();
        assert_eq!(url.as_str(), "http://a.example/x/w");
    }

    #[test]
    fn test_scheme_relative_reference() {
        let b = base("https://a.example/x");
        let url = resolve_reference("//b.example/y", Some(&b)).unwrap();
        assert_eq!(url.as_str(), "https://b.example/y");
    }

    #[test]
    fn test_relative_without_base_is_invalid() {
        let err = resolve_reference("/z", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrlError);
    }

    #[test]
    fn test_unparseable_is_invalid() {
        let err = resolve_reference("http://[::1", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrlError);
        let err = resolve_reference("http://exa mple.com/", None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUrlError);
    }

    #[test]
    fn test_default_ports() {
        let http = HopTarget::from_url(&base("http://t.co/abc")).unwrap();
        assert_eq!(http.port, 80);
        assert!(!http.tls);

        let https = HopTarget::from_url(&base("https://bit.ly/xyz")).unwrap();
        assert_eq!(https.port, 443);
        assert!(https.tls);
    }

    #[test]
    fn test_explicit_port() {
        let target = HopTarget::from_url(&base("http://localhost:8080/a")).unwrap();
        assert_eq!(target.host, "localhost");
        assert_eq!(target.port, 8080);
    }

    #[test]
    fn test_unsupported_scheme() {
        let err = HopTarget::from_url(&base("ftp://example.com/file")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSchemeError);

        let mailto = resolve_reference("mailto:someone@example.com", None).unwrap();
        let err = HopTarget::from_url(&mailto).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedSchemeError);
    }

    #[test]
    fn test_request_target_preserves_encoding() {
        let url = base("http://a.example/p%20q/r?x=%2F&y=1#frag%20ment");
        assert_eq!(request_target(&url), "/p%20q/r?x=%2F&y=1#frag%20ment");
    }

    #[test]
    fn test_request_target_skips_empty_query_and_fragment() {
        let url = base("http://a.example/p?#");
        assert_eq!(request_target(&url), "/p");
    }

    #[test]
    fn test_request_target_root() {
        let url = base("http://a.example");
        assert_eq!(request_target(&url), "/");
    }
}
