//! Endpoint probing
//!
//! This module performs the HTTP probes, drives them in bounded batches,
//! collects accepted results and groups them for reporting.

pub mod aggregate;
pub mod client;
pub mod engine;
pub mod store;

use std::time::Instant;

use crate::reporting::logging;
use crate::ui::ProgressReporter;

// Re-export commonly used items
pub use aggregate::{GroupedResults, ScanSummary, group_by_status};
pub use client::{HttpProber, ProbeResponse, Prober, probe_url};
pub use engine::ScanEngine;
pub use store::ResultStore;

/// Run a full scan of `paths` against `base_url` and summarize it.
pub async fn scan_target<P>(
    engine: &ScanEngine<P>,
    base_url: &str,
    paths: &[String],
    progress: Option<&ProgressReporter>,
) -> ScanSummary
where
    P: Prober + 'static,
{
    logging::log_scan_start(base_url, paths.len(), engine.batch_size());

    let start = Instant::now();
    let results = engine.run(base_url, paths, progress).await;
    let elapsed = start.elapsed();

    logging::log_scan_complete(paths.len(), results.len(), elapsed.as_millis());

    ScanSummary::new(
        base_url.to_string(),
        paths.len(),
        elapsed.as_secs_f64(),
        results,
    )
}
