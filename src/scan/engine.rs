use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::sync::Arc;

use crate::core::constants::engine;
use crate::core::types::ProbeResult;
use crate::reporting::logging;
use crate::scan::client::{Prober, probe_url};
use crate::scan::store::ResultStore;
use crate::ui::ProgressReporter;

/// Drives a [`Prober`] over a path sequence in barrier-synchronized batches.
///
/// Each batch spawns one task per path and is fully joined before the next
/// batch starts, so at most `batch_size` probes are ever in flight.
#[derive(Debug)]
pub struct ScanEngine<P> {
    prober: Arc<P>,
    batch_size: usize,
}

impl<P> ScanEngine<P>
where
    P: Prober + 'static,
{
    pub fn new(prober: P, batch_size: usize) -> Self {
        Self {
            prober: Arc::new(prober),
            batch_size: batch_size.max(1),
        }
    }

    pub fn with_default_batch_size(prober: P) -> Self {
        Self::new(prober, engine::DEFAULT_BATCH_SIZE)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Probe every path once and return the accepted results.
    ///
    /// Results are in completion order within a batch, batches in path order.
    pub async fn run(
        &self,
        base_url: &str,
        paths: &[String],
        progress: Option<&ProgressReporter>,
    ) -> Vec<ProbeResult> {
        let store = Arc::new(ResultStore::new());
        let base_url: Arc<str> = Arc::from(base_url);

        for (batch_index, batch) in paths.chunks(self.batch_size).enumerate() {
            logging::log_batch_start(batch_index, batch.len());

            let mut in_flight: FuturesUnordered<_> = batch
                .iter()
                .map(|path| {
                    let prober = Arc::clone(&self.prober);
                    let store = Arc::clone(&store);
                    let base_url = Arc::clone(&base_url);
                    let path = path.clone();

                    tokio::spawn(async move {
                        let response = prober.probe(&base_url, &path).await?;
                        if !response.is_accepted() {
                            return None;
                        }
                        store.push(response.into_result(probe_url(&base_url, &path)));
                        Some(())
                    })
                })
                .collect();

            while let Some(joined) = in_flight.next().await {
                if let Err(err) = joined {
                    // A task that panicked or was cancelled counts as skipped
                    logging::log_task_failure(&err);
                }
                if let Some(progress) = progress {
                    progress.probe_finished();
                }
            }
        }

        match Arc::try_unwrap(store) {
            Ok(store) => store.into_results(),
            Err(shared) => shared.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::scan::client::ProbeResponse;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Prober answering from a fixed table and recording how it was driven.
    #[derive(Default)]
    struct FakeProber {
        statuses: HashMap<String, u16>,
        delay: Duration,
        calls: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
        ticks: AtomicUsize,
        events: Mutex<HashMap<String, (usize, usize)>>,
        panic_on: Option<String>,
    }

    impl FakeProber {
        fn with_statuses(statuses: &[(&str, u16)]) -> Self {
            Self {
                statuses: statuses
                    .iter()
                    .map(|(path, status)| (path.to_string(), *status))
                    .collect(),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Prober for FakeProber {
        async fn probe(&self, _base_url: &str, path: &str) -> Option<ProbeResponse> {
            let start_tick = self.ticks.fetch_add(1, Ordering::SeqCst);
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);
            self.calls.lock().unwrap().push(path.to_string());

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            let end_tick = self.ticks.fetch_add(1, Ordering::SeqCst);
            self.events
                .lock()
                .unwrap()
                .insert(path.to_string(), (start_tick, end_tick));

            if self.panic_on.as_deref() == Some(path) {
                panic!("probe blew up");
            }

            self.statuses.get(path).map(|&status| ProbeResponse {
                status,
                content_type: Some("text/html".to_string()),
                elapsed_seconds: 0.01,
                byte_size: 42,
            })
        }
    }

    fn numbered_paths(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("/p{i:03}")).collect()
    }

    #[tokio::test]
    async fn test_run__keeps_non_404_and_skips_failures() {
        let prober = FakeProber::with_statuses(&[("/", 200), ("/admin", 403), ("/login", 404)]);
        let engine = ScanEngine::with_default_batch_size(prober);
        let paths: Vec<String> = ["/", "/admin", "/api", "/login"]
            .iter()
            .map(|p| p.to_string())
            .collect();

        let mut results = engine.run("http://example.test", &paths, None).await;
        results.sort_by(|a, b| a.url().cmp(b.url()));

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].url(), "http://example.test/");
        assert_eq!(results[0].status(), 200);
        assert_eq!(results[1].url(), "http://example.test/admin");
        assert_eq!(results[1].status(), 403);
        assert!(results.iter().all(|r| r.status() != 404));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_run__probes_every_path_exactly_once() {
        let paths = numbered_paths(47);
        let statuses: Vec<(&str, u16)> = paths.iter().map(|p| (p.as_str(), 200)).collect();
        let prober = FakeProber::with_statuses(&statuses);
        let engine = ScanEngine::with_default_batch_size(prober);

        let results = engine.run("http://example.test", &paths, None).await;

        let mut calls = engine.prober.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 47);
        calls.sort();
        calls.dedup();
        assert_eq!(calls, paths);
        assert_eq!(results.len(), 47);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_run__bounds_concurrency_by_batch_size() {
        let paths = numbered_paths(45);
        let prober = FakeProber {
            delay: Duration::from_millis(30),
            ..Default::default()
        };
        let engine = ScanEngine::new(prober, 20);

        engine.run("http://example.test", &paths, None).await;

        let max = engine.prober.max_in_flight.load(Ordering::SeqCst);
        assert!(max <= 20, "saw {max} probes in flight");
        assert!(max > 1, "probes in a batch should overlap");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_run__batches_are_barrier_synchronized() {
        let paths = numbered_paths(50);
        let prober = FakeProber {
            delay: Duration::from_millis(10),
            ..Default::default()
        };
        let engine = ScanEngine::new(prober, 20);

        engine.run("http://example.test", &paths, None).await;

        let events = engine.prober.events.lock().unwrap();
        let batches: Vec<&[String]> = paths.chunks(20).collect();
        for pair in batches.windows(2) {
            let last_end = pair[0].iter().map(|p| events[p].1).max().unwrap();
            let first_start = pair[1].iter().map(|p| events[p].0).min().unwrap();
            assert!(
                last_end < first_start,
                "next batch started at tick {first_start} before previous ended at {last_end}"
            );
        }
    }

    #[tokio::test]
    async fn test_run__panicking_probe_is_skipped() {
        let mut prober = FakeProber::with_statuses(&[("/a", 200), ("/b", 200), ("/c", 200)]);
        prober.panic_on = Some("/b".to_string());
        let engine = ScanEngine::new(prober, 2);
        let paths: Vec<String> = ["/a", "/b", "/c"].iter().map(|p| p.to_string()).collect();

        let mut results = engine.run("http://example.test", &paths, None).await;
        results.sort_by(|a, b| a.url().cmp(b.url()));

        let urls: Vec<&str> = results.iter().map(ProbeResult::url).collect();
        assert_eq!(urls, vec!["http://example.test/a", "http://example.test/c"]);
    }

    #[tokio::test]
    async fn test_run__empty_path_list() {
        let engine = ScanEngine::with_default_batch_size(FakeProber::default());

        let results = engine.run("http://example.test", &[], None).await;

        assert!(results.is_empty());
        assert!(engine.prober.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_new__zero_batch_size_is_clamped() {
        let engine = ScanEngine::new(FakeProber::default(), 0);

        assert_eq!(engine.batch_size(), 1);
    }

    #[tokio::test]
    async fn test_run__advances_progress_once_per_probe() {
        let engine = ScanEngine::new(FakeProber::default(), 3);
        let paths = numbered_paths(7);
        let mut progress = ProgressReporter::new(false);
        progress.start_scan(paths.len());

        engine.run("http://example.test", &paths, Some(&progress)).await;

        assert_eq!(progress.finished_probes(), 7);
    }
}
