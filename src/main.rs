//! `gh-org` — list a GitHub organization's repositories, optionally by license.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]); CLI flags override it.
//! 3. Fetch the organization record, then the repositories at its `repos_url`
//!    ([`client::GithubOrgClient`] over [`fetcher::HttpFetcher`]).
//! 4. Filter repository names by license key and render the requested report
//!    ([`report`], or JSON on stdout).

mod cli;
mod client;
mod config;
mod error;
mod fetcher;
mod models;
mod nested;
mod report;

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use cli::{Cli, ReportFormat};
use client::GithubOrgClient;
use config::load_config;
use fetcher::{HttpFetcher, JsonFetcher};
use models::OrgReport;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let work_dir = std::env::current_dir()?;
    let config = load_config(&work_dir, cli.config.as_deref())?;

    let api_base = cli
        .api_url
        .clone()
        .unwrap_or_else(|| config.api.base_url.clone());
    let timeout = cli
        .timeout
        .map(Duration::from_secs)
        .or_else(|| config.api.timeout());
    let license = cli.license.clone().map(Value::String).or(config.filter.license);

    let show_status = !cli.quiet && cli.report == ReportFormat::Terminal;

    if show_status {
        if let Some(filter) = license.as_ref().filter(|l| !l.is_string()) {
            eprintln!(
                "  {} license filter {} is not a string; no repository will match",
                "⚠".yellow(),
                filter
            );
        }
    }

    let fetcher = HttpFetcher::new(timeout).context("failed to build HTTP client")?;
    let client = GithubOrgClient::new(cli.org.as_str(), fetcher).with_api_base(api_base);

    let pb = if show_status {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = fetch_report(&client, license.as_ref(), cli.verbose && !cli.quiet, pb.as_ref());

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }

    let report = result.with_context(|| format!("failed to list repositories of {}", cli.org))?;

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&report, cli.quiet),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn fetch_report<F: JsonFetcher>(
    client: &GithubOrgClient<F>,
    license: Option<&Value>,
    verbose: bool,
    pb: Option<&ProgressBar>,
) -> Result<OrgReport> {
    let note = |msg: String| {
        if let Some(pb) = pb {
            pb.set_message(msg.clone());
        }
        if verbose {
            let line = format!("  {} {}", "→".cyan(), msg);
            match pb {
                Some(pb) => pb.println(line),
                None => eprintln!("{}", line),
            }
        }
    };

    note(format!("GET {}", client.org_url()));
    client.org()?;

    note(format!("GET {}", client.repos_url()?));
    client.repos_payload()?;

    Ok(OrgReport::collect(client, license)?)
}
