//! Content fetcher: download every URL of a list and save each body under its
//! derived filename.
//!
//! Strictly sequential. A failed URL is logged and skipped; after every
//! attempt the loop sleeps the configured delay. Only local I/O failures
//! (unreadable list, unwritable output directory) stop the run.

mod error;

pub use error::FetchError;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::FetcherConfig;
use crate::http::{self, HttpOptions};
use crate::storage;
use crate::url_list;
use crate::url_model::derive_filename;

/// A successfully downloaded page, held only until it is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub url: String,
    pub filename: String,
    pub body: Vec<u8>,
}

/// Result of one URL attempt.
#[derive(Debug)]
pub enum FetchOutcome {
    Saved {
        url: String,
        filename: String,
        path: PathBuf,
        bytes: usize,
    },
    Failed {
        url: String,
        error: FetchError,
    },
}

impl FetchOutcome {
    pub fn url(&self) -> &str {
        match self {
            FetchOutcome::Saved { url, .. } | FetchOutcome::Failed { url, .. } => url,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, FetchOutcome::Saved { .. })
    }
}

/// Outcomes of a whole run, in input order.
#[derive(Debug, Default)]
pub struct FetchSummary {
    pub outcomes: Vec<FetchOutcome>,
}

impl FetchSummary {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }
}

/// GET `url` and pair the body with its derived filename.
pub fn fetch_document(url: &str, opts: &HttpOptions) -> Result<FetchedDocument, FetchError> {
    let response = http::get(url, opts)?;
    if !response.is_success() {
        return Err(FetchError::Status(response.status));
    }
    if response.body.is_empty() {
        return Err(FetchError::EmptyBody);
    }
    Ok(FetchedDocument {
        url: url.to_string(),
        filename: derive_filename(url),
        body: response.body,
    })
}

/// Fetch every URL in order into `cfg.output_dir`.
///
/// `on_outcome` is called after each attempt, before the inter-request delay.
pub fn fetch_all<S, F>(urls: &[S], cfg: &FetcherConfig, mut on_outcome: F) -> Result<FetchSummary>
where
    S: AsRef<str>,
    F: FnMut(&FetchOutcome),
{
    let output_dir = cfg.output_dir.as_path();
    storage::ensure_dir(output_dir)?;

    let opts = cfg.http_options();
    let delay = cfg.delay();
    let mut summary = FetchSummary::default();

    for url in urls {
        let url = url.as_ref().trim();
        if url.is_empty() {
            continue;
        }

        let outcome = fetch_one(url, &opts, output_dir)?;
        on_outcome(&outcome);
        summary.outcomes.push(outcome);

        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }

    tracing::info!(
        saved = summary.saved(),
        failed = summary.failed(),
        dir = %output_dir.display(),
        "fetch run finished"
    );
    Ok(summary)
}

/// Read `cfg.urls_file` and run [`fetch_all`] over it.
pub fn run_fetch<F>(cfg: &FetcherConfig, on_outcome: F) -> Result<FetchSummary>
where
    F: FnMut(&FetchOutcome),
{
    let urls = url_list::read_url_list(&cfg.urls_file)
        .with_context(|| format!("read URL list {}", cfg.urls_file.display()))?;
    tracing::info!(
        count = urls.len(),
        file = %cfg.urls_file.display(),
        "loaded URL list"
    );
    fetch_all(urls.as_slice(), cfg, on_outcome)
}

fn fetch_one(url: &str, opts: &HttpOptions, output_dir: &Path) -> Result<FetchOutcome> {
    match fetch_document(url, opts) {
        Ok(doc) => {
            let path = storage::save_document(output_dir, &doc)?;
            tracing::debug!(url, path = %path.display(), bytes = doc.body.len(), "saved document");
            Ok(FetchOutcome::Saved {
                url: doc.url,
                filename: doc.filename,
                path,
                bytes: doc.body.len(),
            })
        }
        Err(error) => {
            tracing::warn!(url, %error, "error fetching URL");
            Ok(FetchOutcome::Failed {
                url: url.to_string(),
                error,
            })
        }
    }
}
