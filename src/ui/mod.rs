//! User interface and interaction
//!
//! This module contains CLI parsing, report formatting and progress
//! reporting.

pub mod cli;
pub mod color;
pub mod output;
pub mod progress;

// Re-export commonly used items
pub use cli::{Cli, cli_to_config, require_base_url};
pub use progress::ProgressReporter;
