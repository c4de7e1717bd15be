use std::error::Error;
use std::fmt;

/// Errors coming back from the listing backend.
///
/// 403 and 410 carry domain meaning (upsell flow, card removal) and are
/// expected outcomes, not failures. Everything else is surfaced as a
/// generic failure and never retried.
#[derive(Debug)]
pub enum ApiError {
    Transport(String),
    Http(u16),
    AccessDenied,
    Gone,
    BadShape(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Network error: {msg}"),
            ApiError::Http(status) => write!(f, "Unexpected response: {status}"),
            ApiError::AccessDenied => write!(f, "Subscription required"),
            ApiError::Gone => write!(f, "Listing no longer exists"),
            ApiError::BadShape(msg) => write!(f, "Unexpected data shape: {msg}"),
        }
    }
}

impl Error for ApiError {}
