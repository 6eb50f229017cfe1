//! `docpull collect` – gather navigation links into a URL list.

use anyhow::Result;
use docpull_core::collector::{self, ChromeDriver};
use docpull_core::config::CollectorConfig;
use std::path::PathBuf;

/// Command-line overrides for [`CollectorConfig`].
#[derive(Debug, Default)]
pub struct CollectArgs {
    pub page_url: Option<String>,
    pub output: Option<PathBuf>,
    pub wait_secs: Option<u64>,
    pub headful: bool,
}

impl CollectArgs {
    pub fn apply(self, mut cfg: CollectorConfig) -> CollectorConfig {
        if let Some(url) = self.page_url {
            cfg.page_url = url;
        }
        if let Some(output) = self.output {
            cfg.output_file = output;
        }
        if let Some(secs) = self.wait_secs {
            cfg.wait_timeout_secs = secs;
        }
        if self.headful {
            cfg.headless = false;
        }
        cfg
    }
}

pub fn run_collect(cfg: &CollectorConfig) -> Result<()> {
    let driver = ChromeDriver::new(cfg.headless);
    let report = collector::run_collect(&driver, cfg)?;
    println!(
        "Wrote {} URLs to {}",
        report.urls.len(),
        report.output_file.display()
    );
    Ok(())
}
