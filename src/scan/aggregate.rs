use std::collections::BTreeMap;

use crate::core::types::ProbeResult;

/// Results keyed by status code; iteration is in ascending status order and
/// each group keeps the order the results were stored in.
pub type GroupedResults = BTreeMap<u16, Vec<ProbeResult>>;

/// Partition stored results by status code.
pub fn group_by_status(results: Vec<ProbeResult>) -> GroupedResults {
    let mut grouped = GroupedResults::new();
    for result in results {
        grouped.entry(result.status()).or_default().push(result);
    }
    grouped
}

/// Everything the report layer needs once a scan is finished.
#[derive(Debug, Clone)]
pub struct ScanSummary {
    pub target: String,
    pub paths_scanned: usize,
    pub elapsed_seconds: f64,
    pub groups: GroupedResults,
}

impl ScanSummary {
    pub fn new(
        target: String,
        paths_scanned: usize,
        elapsed_seconds: f64,
        results: Vec<ProbeResult>,
    ) -> Self {
        Self {
            target,
            paths_scanned,
            elapsed_seconds,
            groups: group_by_status(results),
        }
    }

    pub fn endpoints_found(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// All results, group by group.
    pub fn results(&self) -> impl Iterator<Item = &ProbeResult> {
        self.groups.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    fn result(path: &str, status: u16) -> ProbeResult {
        ProbeResult::new(format!("http://example.test{path}"), status, None, 0.1, 10)
    }

    #[test]
    fn test_group_by_status__ascending_groups() {
        let results = vec![
            result("/admin", 403),
            result("/", 200),
            result("/api", 500),
            result("/v1", 200),
        ];

        let grouped = group_by_status(results);

        let codes: Vec<u16> = grouped.keys().copied().collect();
        assert_eq!(codes, vec![200, 403, 500]);
    }

    #[test]
    fn test_group_by_status__keeps_insertion_order_within_group() {
        let results = vec![result("/z", 200), result("/a", 200), result("/m", 200)];

        let grouped = group_by_status(results);

        let urls: Vec<&str> = grouped[&200].iter().map(ProbeResult::url).collect();
        assert_eq!(
            urls,
            vec![
                "http://example.test/z",
                "http://example.test/a",
                "http://example.test/m"
            ]
        );
    }

    #[test]
    fn test_group_by_status__empty() {
        assert!(group_by_status(Vec::new()).is_empty());
    }

    #[test]
    fn test_scan_summary__counts() {
        let summary = ScanSummary::new(
            "http://example.test".to_string(),
            36,
            1.5,
            vec![result("/", 200), result("/admin", 403)],
        );

        assert_eq!(summary.endpoints_found(), 2);
        assert_eq!(summary.paths_scanned, 36);
        let urls: Vec<&str> = summary.results().map(ProbeResult::url).collect();
        assert_eq!(urls, vec!["http://example.test/", "http://example.test/admin"]);
    }
}
