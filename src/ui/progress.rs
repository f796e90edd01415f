use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

const SCAN_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} paths probed ({eta})";

/// Progress bar for a scan. Counting happens even when the bar is disabled.
pub struct ProgressReporter {
    scan_progress: Option<ProgressBar>,
    finished: AtomicUsize,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            scan_progress: None,
            finished: AtomicUsize::new(0),
            enabled,
        }
    }

    pub fn start_scan(&mut self, total_paths: usize) {
        self.finished.store(0, Ordering::Relaxed);
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new(total_paths as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(SCAN_TEMPLATE)
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb.set_message("Probing paths");
        pb.enable_steady_tick(Duration::from_millis(120));
        self.scan_progress = Some(pb);
    }

    /// Called once for every probe that finished, accepted or not.
    pub fn probe_finished(&self) {
        let current = self.finished.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(ref pb) = self.scan_progress {
            pb.set_position(current as u64);
        }
    }

    pub fn finished_probes(&self) -> usize {
        self.finished.load(Ordering::Relaxed)
    }

    pub fn finish_scan(&self, endpoints_found: usize) {
        if let Some(ref pb) = self.scan_progress {
            pb.finish_with_message(format!("✓ Scan complete ({endpoints_found} endpoints)"));
        }
    }

    pub fn finish_and_clear(&self) {
        if let Some(ref pb) = self.scan_progress {
            pb.finish_and_clear();
        }
    }
}
