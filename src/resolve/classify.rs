//! Redirect classification.

use crate::config::REDIRECT_STATUS_CODES;

/// How a hop's response is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HopClass {
    /// Follow the `location` header
    Redirect,
    /// Resolution ends here and the body is the result
    Terminal,
}

/// Classifies a status code: 301, 302, 303 and 307 are redirects, everything
/// else is terminal.
pub fn classify_status(status: u16) -> HopClass {
    if REDIRECT_STATUS_CODES.contains(&status) {
        HopClass::Redirect
    } else {
        HopClass::Terminal
    }
}
