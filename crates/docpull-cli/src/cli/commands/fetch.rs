//! `docpull fetch` – download every URL of a list.

use anyhow::Result;
use docpull_core::config::FetcherConfig;
use docpull_core::fetcher::{self, FetchOutcome};
use std::path::PathBuf;

/// Command-line overrides for [`FetcherConfig`].
#[derive(Debug, Default)]
pub struct FetchArgs {
    pub urls: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub delay_secs: Option<f64>,
}

impl FetchArgs {
    pub fn apply(self, mut cfg: FetcherConfig) -> FetcherConfig {
        if let Some(urls) = self.urls {
            cfg.urls_file = urls;
        }
        if let Some(dir) = self.output_dir {
            cfg.output_dir = dir;
        }
        if let Some(delay) = self.delay_secs {
            cfg.delay_secs = delay;
        }
        cfg
    }
}

fn report(outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Saved { url, filename, .. } => {
            println!("Saved content from {url} to {filename}");
        }
        FetchOutcome::Failed { url, error } => {
            eprintln!("Error fetching URL {url}: {error}");
            println!("Failed to fetch content from {url}");
        }
    }
}

pub fn run_fetch(cfg: &FetcherConfig) -> Result<()> {
    let summary = fetcher::run_fetch(cfg, report)?;
    tracing::info!(
        "fetch completed: {} saved, {} failed",
        summary.saved(),
        summary.failed()
    );
    Ok(())
}
