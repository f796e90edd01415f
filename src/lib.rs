//! # endpoint-finder
//!
//! Discover which paths on a single host answer over HTTP(S).
//!
//! A built-in wordlist, optionally merged with a user wordlist, is probed
//! in bounded parallel batches; every path that does not return 404 is
//! reported with its status, content type, timing and size.
//!
//! ## Architecture
//!
//! - [`core`] - Fundamental types, errors, and constants
//! - [`config`] - Configuration management (TOML and CLI merging)
//! - [`wordlist`] - Built-in paths, wordlist files and path set building
//! - [`scan`] - Probe client, batch engine, result store and grouping
//! - [`reporting`] - Structured logging
//! - [`ui`] - CLI parsing, progress and report output
//!
//! ## Example
//!
//! ```no_run
//! use endpoint_finder::config::Config;
//! use endpoint_finder::scan::{HttpProber, ScanEngine, scan_target};
//! use endpoint_finder::wordlist::{build_path_set, default_paths};
//!
//! # async fn example() -> endpoint_finder::Result<()> {
//! let config = Config::default();
//! let paths = build_path_set(&default_paths(), None);
//! let engine = ScanEngine::new(HttpProber::new(&config)?, config.batch_size());
//!
//! let summary = scan_target(&engine, "https://example.com", &paths, None).await;
//! for (status, results) in &summary.groups {
//!     println!("{status}: {} endpoint(s)", results.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod reporting;
pub mod scan;
pub mod ui;
pub mod wordlist;

// Re-export commonly used types for convenience
pub use config::{CliConfig, Config};
pub use crate::core::{FinderError, ProbeResult, Result};
pub use scan::{HttpProber, Prober, ScanEngine, ScanSummary};

// Module aliases for shorter import paths
pub use crate::core::constants;
pub use crate::core::error;
pub use crate::core::types;
