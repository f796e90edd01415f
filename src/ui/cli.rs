// Command-line interface definitions and parsing for endpoint-finder

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use crate::core::error::{FinderError, Result};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the target host (e.g. https://example.com)
    pub base_url: Option<String>,

    /// Extra paths, one per line; blank lines and lines starting with '#' are skipped
    pub wordlist: Option<String>,

    // Probe Options
    /// Request timeout in seconds (default: 8)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Probe Options"
    )]
    pub timeout: Option<u64>,

    /// Probes run together before waiting for the batch (default: 20)
    #[arg(long, value_name = "COUNT", help_heading = "Probe Options")]
    pub batch_size: Option<usize>,

    /// Redirect hops to follow (default: 5)
    #[arg(long, value_name = "COUNT", help_heading = "Probe Options")]
    pub max_redirects: Option<usize>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Probe Options")]
    pub user_agent: Option<String>,

    // Filtering
    /// Path patterns to skip (regex, repeatable)
    #[arg(long, value_name = "REGEX", help_heading = "Filtering")]
    pub exclude_pattern: Vec<String>,

    // Output & Verbosity
    /// Only print the report
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the progress bar
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Configuration
    /// Load settings from a TOML file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,
}

/// Convert the derive-based CLI to CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        batch_size: cli.batch_size,
        max_redirects: cli.max_redirects,
        user_agent: cli.user_agent.clone(),
        exclude_patterns: if cli.exclude_pattern.is_empty() {
            None
        } else {
            Some(cli.exclude_pattern.clone())
        },
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        no_progress: cli.no_progress,
        config_file: cli.config.clone(),
    }
}

/// The target base URL, or a usage error naming `program` when it is absent
pub fn require_base_url<'a>(cli: &'a Cli, program: &str) -> Result<&'a str> {
    cli.base_url
        .as_deref()
        .ok_or_else(|| FinderError::Usage(format!("{program} <base_url> [wordlist_file]")))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn test_cli__positional_arguments() {
        let cli = Cli::parse_from(["endpoint-finder", "http://example.test", "words.txt"]);

        assert_eq!(cli.base_url.as_deref(), Some("http://example.test"));
        assert_eq!(cli.wordlist.as_deref(), Some("words.txt"));
    }

    #[test]
    fn test_cli__base_url_is_optional_at_parse_time() {
        let cli = Cli::parse_from(["endpoint-finder"]);

        assert!(cli.base_url.is_none());
        assert!(cli.wordlist.is_none());
    }

    #[test]
    fn test_cli_to_config__maps_options() {
        let cli = Cli::parse_from([
            "endpoint-finder",
            "http://example.test",
            "--timeout",
            "3",
            "--batch-size",
            "10",
            "--max-redirects",
            "2",
            "--exclude-pattern",
            r"^/\.",
            "--exclude-pattern",
            "^/v",
            "--format",
            "json",
            "-q",
            "-v",
            "--no-progress",
            "--config",
            "scan.toml",
        ]);

        let config = cli_to_config(&cli);

        assert_eq!(config.timeout, Some(3));
        assert_eq!(config.batch_size, Some(10));
        assert_eq!(config.max_redirects, Some(2));
        assert_eq!(
            config.exclude_patterns,
            Some(vec![r"^/\.".to_string(), "^/v".to_string()])
        );
        assert_eq!(config.output_format.as_deref(), Some("json"));
        assert!(config.quiet);
        assert!(config.verbose);
        assert!(config.no_progress);
        assert_eq!(config.config_file.as_deref(), Some("scan.toml"));
    }

    #[test]
    fn test_cli_to_config__no_exclude_patterns() {
        let cli = Cli::parse_from(["endpoint-finder", "http://example.test"]);

        assert!(cli_to_config(&cli).exclude_patterns.is_none());
    }

    #[test]
    fn test_cli__rejects_unknown_format() {
        let result = Cli::try_parse_from(["endpoint-finder", "http://x", "--format", "xml"]);

        assert!(result.is_err());
    }

    #[test]
    fn test_require_base_url__when_missing() {
        let cli = Cli::parse_from(["endpoint-finder"]);

        let err = require_base_url(&cli, "endpoint-finder").unwrap_err();

        assert!(matches!(err, FinderError::Usage(_)));
        assert_eq!(
            err.to_string(),
            "Usage: endpoint-finder <base_url> [wordlist_file]"
        );
    }

    #[test]
    fn test_require_base_url__when_present() {
        let cli = Cli::parse_from(["endpoint-finder", "http://example.test"]);

        assert_eq!(
            require_base_url(&cli, "endpoint-finder").ok(),
            Some("http://example.test")
        );
    }
}
