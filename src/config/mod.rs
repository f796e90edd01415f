//! Configuration management
//!
//! This module handles loading scan settings from an explicit TOML file
//! and merging them with CLI arguments.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{engine, output_formats, probe};
use crate::core::error::{FinderError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Per-request timeout in seconds
    pub timeout: Option<u64>,

    /// Probes dispatched together in one batch
    pub batch_size: Option<usize>,

    /// Redirect hops followed per probe
    pub max_redirects: Option<usize>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Path patterns to drop from the wordlist (regex)
    pub exclude_patterns: Option<Vec<String>>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(probe::DEFAULT_TIMEOUT_SECONDS),
            batch_size: Some(engine::DEFAULT_BATCH_SIZE),
            max_redirects: Some(probe::DEFAULT_MAX_REDIRECTS),
            user_agent: None, // Falls back to the built-in browser string
            exclude_patterns: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            FinderError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            FinderError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        // Probe contract
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(max_redirects) = cli_config.max_redirects {
            self.max_redirects = Some(max_redirects);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }

        // Engine
        if let Some(batch_size) = cli_config.batch_size {
            self.batch_size = Some(batch_size);
        }

        // Filtering
        if let Some(ref exclude_patterns) = cli_config.exclude_patterns {
            self.exclude_patterns = Some(exclude_patterns.clone());
        }

        // Output & format
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
    }

    /// Compile exclude patterns into regex objects
    pub fn compile_exclude_patterns(&self) -> Result<Vec<Regex>> {
        let mut compiled = Vec::new();
        if let Some(ref patterns) = self.exclude_patterns {
            for pattern in patterns {
                compiled.push(Regex::new(pattern)?);
            }
        }
        Ok(compiled)
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(probe::DEFAULT_TIMEOUT_SECONDS))
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size.unwrap_or(engine::DEFAULT_BATCH_SIZE)
    }

    pub fn max_redirects(&self) -> usize {
        self.max_redirects.unwrap_or(probe::DEFAULT_MAX_REDIRECTS)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(probe::DEFAULT_USER_AGENT)
    }

    pub fn output_format(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(FinderError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > probe::MAX_TIMEOUT_SECONDS {
                return Err(FinderError::Config(format!(
                    "Timeout of {timeout} seconds is too large (>1 hour). Consider using a smaller value."
                )));
            }
        }

        if let Some(batch_size) = self.batch_size {
            if batch_size == 0 {
                return Err(FinderError::Config(
                    "Batch size cannot be 0. Expected a positive integer.".to_string(),
                ));
            }
            if batch_size > engine::MAX_BATCH_SIZE {
                return Err(FinderError::Config(format!(
                    "Batch size of {batch_size} is extremely high and may exhaust sockets. Consider using a smaller value."
                )));
            }
        }

        if let Some(max_redirects) = self.max_redirects
            && max_redirects > probe::MAX_REDIRECTS_LIMIT
        {
            return Err(FinderError::Config(format!(
                "Redirect cap of {max_redirects} is above the limit of {}.",
                probe::MAX_REDIRECTS_LIMIT
            )));
        }

        if let Some(ref format) = self.output_format
            && !output_formats::ALL.contains(&format.as_str())
        {
            return Err(FinderError::Config(format!(
                "Invalid output format '{format}'. Expected one of: {}.",
                output_formats::ALL.join(", ")
            )));
        }

        // Validate exclude patterns by trying to compile them
        self.compile_exclude_patterns()?;

        Ok(())
    }
}

/// Configuration options that can come from CLI
#[derive(Debug, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,                  // --timeout
    pub batch_size: Option<usize>,             // --batch-size
    pub max_redirects: Option<usize>,          // --max-redirects
    pub user_agent: Option<String>,            // --user-agent
    pub exclude_patterns: Option<Vec<String>>, // --exclude-pattern

    pub quiet: bool,                   // --quiet
    pub verbose: bool,                 // --verbose
    pub output_format: Option<String>, // --format
    pub no_progress: bool,             // --no-progress

    pub config_file: Option<String>, // --config
}
