use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::Lossy;
use once_cell::sync::Lazy;

use crate::core::constants::wordlist;
use crate::reporting::logging;

use std::{io, path::Path};

static LINE_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(wordlist::NON_EMPTY_LINE_PATTERN)
        .expect("Failed to compile wordlist line pattern")
});

pub trait PathReader {
    fn read_paths(&self, path: &Path) -> io::Result<Vec<String>>;
}

/// Reads one candidate path per line, skipping blank and `#` lines.
///
/// Invalid UTF-8 in a line is replaced, not fatal; other lines are kept.
#[derive(Default, Debug)]
pub struct WordlistReader {}

impl PathReader for WordlistReader {
    fn read_paths(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut paths = Vec::new();

        Searcher::new().search_path(
            &*LINE_MATCHER,
            path,
            Lossy(|_line_number, line| {
                if let Some(entry) = Self::parse_line(line) {
                    paths.push(entry);
                }
                Ok(true)
            }),
        )?;

        Ok(paths)
    }
}

impl WordlistReader {
    /// Strip the line terminator and drop blank or comment lines.
    ///
    /// Nothing else is trimmed; surrounding spaces are part of the path.
    fn parse_line(line: &str) -> Option<String> {
        let entry = line.trim_end_matches(['\n', '\r']);
        if entry.is_empty() || entry.starts_with(wordlist::COMMENT_MARKER) {
            None
        } else {
            Some(entry.to_string())
        }
    }

    /// Read custom paths, treating any read failure as "none supplied".
    pub fn load_or_empty(&self, path: &Path) -> Vec<String> {
        match self.read_paths(path) {
            Ok(paths) => {
                logging::log_wordlist_info(path, paths.len());
                paths
            }
            Err(e) => {
                logging::log_warning(&format!(
                    "Could not read wordlist '{}', using built-in paths only: {e}",
                    path.display()
                ));
                Vec::new()
            }
        }
    }
}
