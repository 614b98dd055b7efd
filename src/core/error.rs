// src/core/error.rs
use thiserror::Error;

/// Failures that abort a whole fetch call.
/// "Nothing matched" is never one of these; that is an empty Vec or `None`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("listing table not found ({0})")]
    TableNotFound(&'static str),

    #[error("invalid rank window {start}..={end}")]
    InvalidRange { start: usize, end: usize },

    #[error("bad selector {selector:?}: {reason}")]
    Selector { selector: &'static str, reason: String },
}
