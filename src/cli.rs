use std::path::PathBuf;

use clap::builder::NonEmptyStringValueParser;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "gh-org",
    about = "List a GitHub organization's public repositories",
    version
)]
pub struct Cli {
    /// Organization login, e.g. `google`
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub org: String,

    /// Only list repositories whose license key matches exactly (e.g. `apache-2.0`)
    #[arg(long, value_name = "KEY")]
    pub license: Option<String>,

    /// Config file [default: ./.gh-org/config.toml, fallback ~/.config/gh-org/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// API root to query instead of the configured one
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Print the URLs being fetched
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print repository names
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let cli = Cli::try_parse_from(["gh-org", "google"]).unwrap();
        assert_eq!(cli.org, "google");
        assert_eq!(cli.license, None);
        assert_eq!(cli.report, ReportFormat::Terminal);
    }

    #[test]
    fn test_all_args() {
        let cli = Cli::try_parse_from([
            "gh-org",
            "google",
            "--license",
            "apache-2.0",
            "--report",
            "json",
            "--api-url",
            "http://localhost:8080",
            "--timeout",
            "5",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.license.as_deref(), Some("apache-2.0"));
        assert_eq!(cli.report, ReportFormat::Json);
        assert_eq!(cli.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.timeout, Some(5));
        assert!(cli.quiet);
    }

    #[test]
    fn test_empty_org_rejected() {
        assert!(Cli::try_parse_from(["gh-org", ""]).is_err());
    }
}
