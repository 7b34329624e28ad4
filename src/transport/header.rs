//! Header text decoding.

use log::{debug, warn};
use reqwest::header::HeaderValue;

/// Decodes a header value as text.
///
/// Visible-ASCII values are returned as-is. Values carrying raw non-ASCII
/// bytes are decoded as UTF-8, which is what origins that emit unencoded
/// `Location` targets actually send. Bytes that are not valid UTF-8 either are
/// decoded lossily after logging a warning; this never fails.
pub fn header_text(value: &HeaderValue) -> String {
    if let Ok(text) = value.to_str() {
        return text.to_string();
    }

    match std::str::from_utf8(value.as_bytes()) {
        Ok(text) => {
            debug!("Decoded non-ASCII header value as UTF-8: {}", text);
            text.to_string()
        }
        Err(e) => {
            warn!(
                "Header value is not valid UTF-8 ({}), using lossy decoding",
                e
            );
            String::from_utf8_lossy(value.as_bytes()).into_owned()
        }
    }
}
