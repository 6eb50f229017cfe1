//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::{Path, PathBuf};

pub(super) fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_collect_defaults() {
    match parse(&["docpull", "collect"]) {
        CliCommand::Collect {
            page_url,
            output,
            wait_secs,
            headful,
        } => {
            assert!(page_url.is_none());
            assert!(output.is_none());
            assert!(wait_secs.is_none());
            assert!(!headful);
        }
        _ => panic!("expected Collect"),
    }
}

#[test]
fn cli_parse_collect_overrides() {
    match parse(&[
        "docpull",
        "collect",
        "--page-url",
        "https://docs.example.com/",
        "-o",
        "links.txt",
        "--wait-secs",
        "25",
        "--headful",
    ]) {
        CliCommand::Collect {
            page_url,
            output,
            wait_secs,
            headful,
        } => {
            assert_eq!(page_url.as_deref(), Some("https://docs.example.com/"));
            assert_eq!(output.as_deref(), Some(Path::new("links.txt")));
            assert_eq!(wait_secs, Some(25));
            assert!(headful);
        }
        _ => panic!("expected Collect with overrides"),
    }
}

#[test]
fn cli_parse_fetch() {
    match parse(&[
        "docpull",
        "fetch",
        "--urls",
        "urls/list.txt",
        "--output-dir",
        "out",
        "--delay-secs",
        "0.5",
    ]) {
        CliCommand::Fetch {
            urls,
            output_dir,
            delay_secs,
        } => {
            assert_eq!(urls, Some(PathBuf::from("urls/list.txt")));
            assert_eq!(output_dir, Some(PathBuf::from("out")));
            assert_eq!(delay_secs, Some(0.5));
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_filename_many() {
    match parse(&["docpull", "filename", "https://x.com/a", "https://x.com/"]) {
        CliCommand::Filename { urls } => assert_eq!(urls, ["https://x.com/a", "https://x.com/"]),
        _ => panic!("expected Filename"),
    }
}

#[test]
fn cli_filename_requires_a_url() {
    assert!(Cli::try_parse_from(["docpull", "filename"]).is_err());
}

#[test]
fn cli_global_config_flag() {
    let cli = Cli::try_parse_from(["docpull", "fetch", "--config", "/tmp/docpull.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/tmp/docpull.toml")));
    assert!(matches!(cli.command, CliCommand::Fetch { .. }));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["docpull", "crawl"]).is_err());
}
