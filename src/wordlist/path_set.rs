use regex::Regex;

/// Merge the built-in paths with custom ones into a sorted, duplicate-free
/// sequence.
///
/// Ordering is plain byte-wise string ordering, so the result is the same
/// for a given input regardless of where each path came from.
pub fn build_path_set(defaults: &[String], custom: Option<&[String]>) -> Vec<String> {
    let mut paths = Vec::with_capacity(defaults.len() + custom.map_or(0, <[String]>::len));
    paths.extend_from_slice(defaults);
    if let Some(custom) = custom {
        paths.extend_from_slice(custom);
    }

    paths.sort();
    paths.dedup();
    paths
}

/// Drop every path matching one of the exclude patterns.
pub fn exclude_matching(paths: Vec<String>, patterns: &[Regex]) -> Vec<String> {
    if patterns.is_empty() {
        return paths;
    }

    paths
        .into_iter()
        .filter(|path| !patterns.iter().any(|pattern| pattern.is_match(path)))
        .collect()
}
