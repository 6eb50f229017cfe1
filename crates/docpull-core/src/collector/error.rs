//! Fatal link-collection errors.

use std::path::PathBuf;
use thiserror::Error;

/// Any of these ends a `collect` run; the browser is released before it surfaces.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("browser {action} failed: {message}")]
    Browser {
        action: &'static str,
        message: String,
    },
    #[error("navigation to {url} failed: {message}")]
    Navigation { url: String, message: String },
    #[error("element `{selector}` did not appear within {timeout_secs}s: {message}")]
    ElementTimeout {
        selector: String,
        timeout_secs: u64,
        message: String,
    },
    #[error("write URL list {}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    pub(crate) fn browser(action: &'static str, err: impl std::fmt::Display) -> Self {
        CollectError::Browser {
            action,
            message: err.to_string(),
        }
    }
}
