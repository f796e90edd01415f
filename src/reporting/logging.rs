use crate::config::Config;
use log::{debug, info, warn};
use std::path::Path;

/// Level forced by the flags, or `None` when `RUST_LOG` should decide.
///
/// `--quiet` always wins; otherwise a set `RUST_LOG` is left untouched.
fn flag_level(verbose: bool, quiet: bool, rust_log_set: bool) -> Option<log::LevelFilter> {
    if quiet {
        Some(log::LevelFilter::Off)
    } else if rust_log_set {
        None
    } else if verbose {
        Some(log::LevelFilter::Debug)
    } else {
        Some(log::LevelFilter::Off) // Probe failures stay silent unless asked for
    }
}

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let rust_log_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    let level = flag_level(verbose, quiet, rust_log_set);

    let mut builder = env_logger::Builder::from_default_env();
    if let Some(level) = level {
        builder.filter_level(level);
    }

    // try_init so a second call (tests, embedding) is a no-op
    let _ = builder
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let batch_size = config.batch_size();
    let max_redirects = config.max_redirects();

    info!("Configuration: batch_size={batch_size}, timeout={timeout}s, max_redirects={max_redirects}");
    info!("HTTP: user_agent=\"{}\", verify_tls=false", config.user_agent());
    if let Some(ref patterns) = config.exclude_patterns {
        info!("Excluding paths matching: {}", patterns.join(", "));
    }
}

/// Log custom wordlist information
pub fn log_wordlist_info(path: &Path, path_count: usize) {
    info!(
        "Loaded {path_count} custom path(s) from {}",
        path.display()
    );
}

/// Log scan start
pub fn log_scan_start(base_url: &str, path_count: usize, batch_size: usize) {
    info!("Starting scan of {base_url}: {path_count} paths in batches of {batch_size}");
}

/// Log the start of one batch
pub fn log_batch_start(batch_index: usize, batch_len: usize) {
    debug!("Batch {}: dispatching {batch_len} probe(s)", batch_index + 1);
}

/// Log scan completion
pub fn log_scan_complete(path_count: usize, endpoints: usize, duration_ms: u128) {
    info!("Scan complete: {endpoints}/{path_count} paths accessible ({duration_ms}ms)");
}

/// Log a completed probe
pub fn log_probe_result(url: &str, status: u16, elapsed_seconds: f64) {
    debug!("✓ {url} -> {status} ({elapsed_seconds:.3}s)");
}

/// Log a probe whose transport failed; it is otherwise skipped silently
pub fn log_probe_failure(url: &str, err: &reqwest::Error) {
    let description = std::error::Error::source(err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string());
    debug!("✗ {url} -> {description}");
}

/// Log a probe task that never completed
pub fn log_task_failure(err: &tokio::task::JoinError) {
    debug!("Probe task did not complete: {err}");
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
