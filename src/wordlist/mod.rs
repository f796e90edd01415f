//! Wordlist handling
//!
//! This module owns the built-in candidate paths, reading custom
//! wordlist files and building the deduplicated path set to probe.

pub mod defaults;
pub mod path_set;
pub mod reader;

// Re-export commonly used items
pub use defaults::{DEFAULT_PATHS, default_paths};
pub use path_set::{build_path_set, exclude_matching};
pub use reader::{PathReader, WordlistReader};

use std::path::Path;

use crate::config::Config;
use crate::core::error::Result;

/// Build the path set for a scan: built-in paths, plus the wordlist file if
/// one was given and readable, minus anything the exclude patterns match.
pub fn prepare_paths(wordlist: Option<&Path>, config: &Config) -> Result<Vec<String>> {
    let patterns = config.compile_exclude_patterns()?;

    let custom = wordlist.map(|path| WordlistReader::default().load_or_empty(path));
    let paths = build_path_set(&default_paths(), custom.as_deref());

    Ok(exclude_matching(paths, &patterns))
}
