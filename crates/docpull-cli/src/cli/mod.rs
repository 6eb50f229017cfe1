//! CLI for docpull.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docpull_core::config::{self, DocpullConfig};
use std::path::{Path, PathBuf};

use commands::{run_collect, run_fetch, run_filename, CollectArgs, FetchArgs};

/// Top-level CLI for docpull.
#[derive(Debug, Parser)]
#[command(name = "docpull")]
#[command(about = "docpull: collect documentation links in a browser, then download each page", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/docpull/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Open the navigation page in Chrome and write the links of its container to a URL list.
    Collect {
        /// Navigation page to open.
        #[arg(long, value_name = "URL")]
        page_url: Option<String>,
        /// URL list to (over)write.
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Seconds to wait for the container element.
        #[arg(long, value_name = "SECS")]
        wait_secs: Option<u64>,
        /// Show the browser window.
        #[arg(long)]
        headful: bool,
    },

    /// Download every URL of a list into a directory, one file per page.
    Fetch {
        /// URL list to read.
        #[arg(long, value_name = "FILE")]
        urls: Option<PathBuf>,
        /// Directory for the downloaded pages.
        #[arg(long, short, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// Pause after each request, in seconds.
        #[arg(long, value_name = "SECS")]
        delay_secs: Option<f64>,
    },

    /// Print the filename each URL would be saved under.
    Filename {
        #[arg(required = true, value_name = "URL")]
        urls: Vec<String>,
    },
}

fn load_config(path: Option<&Path>) -> Result<DocpullConfig> {
    let cfg = match path {
        Some(p) => config::load_or_init_at(p)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let config_path = cli.config.as_deref();

        match cli.command {
            CliCommand::Collect {
                page_url,
                output,
                wait_secs,
                headful,
            } => {
                let cfg = load_config(config_path)?;
                let args = CollectArgs {
                    page_url,
                    output,
                    wait_secs,
                    headful,
                };
                run_collect(&args.apply(cfg.collector))?;
            }
            CliCommand::Fetch {
                urls,
                output_dir,
                delay_secs,
            } => {
                let cfg = load_config(config_path)?;
                let args = FetchArgs {
                    urls,
                    output_dir,
                    delay_secs,
                };
                run_fetch(&args.apply(cfg.fetcher))?;
            }
            CliCommand::Filename { urls } => run_filename(&urls),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
