use clap::Parser;
use endpoint_finder::config::{CliConfig, Config};
use endpoint_finder::core::constants::output_formats;
use endpoint_finder::reporting::logging;
use endpoint_finder::scan::{HttpProber, ScanEngine, scan_target};
use endpoint_finder::ui::output;
use endpoint_finder::ui::{Cli, ProgressReporter, cli_to_config, require_base_url};
use endpoint_finder::wordlist::prepare_paths;

use std::path::Path;

#[tokio::main]
async fn main() {
    let cli = parse_cli();

    // A missing target is a usage error; nothing is probed
    let base_url = match require_base_url(&cli, &program_name()) {
        Ok(base_url) => base_url,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match run_scan_logic(&cli, base_url).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Parse arguments; malformed options exit with 1 like other usage errors
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let exit_code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(exit_code);
        }
    }
}

fn program_name() -> String {
    std::env::args()
        .next()
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string())
}

/// Main scan logic extracted from main() for testing
pub async fn run_scan_logic(cli: &Cli, base_url: &str) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    // Build the path set
    let paths = prepare_paths(cli.wordlist.as_deref().map(Path::new), &config)?;

    if output_settings.should_show_banner() {
        println!("{}", output::render_banner(base_url, paths.len()));
    }

    let mut progress = create_progress_reporter(&output_settings);
    if let Some(ref mut progress) = progress {
        progress.start_scan(paths.len());
    }

    let engine = ScanEngine::new(HttpProber::new(&config)?, config.batch_size());
    let summary = scan_target(&engine, base_url, &paths, progress.as_ref()).await;

    finalize_progress_reporter(progress, summary.endpoints_found());

    output::display_report(&summary, &output_settings.output_format);

    // Finding nothing is still a successful scan
    Ok(0)
}

/// Load the explicit config file if any, then apply CLI overrides
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file)?
    } else {
        Config::default()
    };

    // CLI takes precedence; re-validate since flags bypass the file checks
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn should_show_banner(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(cli_config: &CliConfig, config: &Config) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config.output_format().to_string();
    let show_progress =
        !quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

/// Create progress reporter if needed
pub fn create_progress_reporter(output_settings: &OutputSettings) -> Option<ProgressReporter> {
    if output_settings.show_progress {
        Some(ProgressReporter::new(true))
    } else {
        None
    }
}

/// Finalize progress reporting
pub fn finalize_progress_reporter(progress: Option<ProgressReporter>, endpoints_found: usize) {
    if let Some(ref progress) = progress {
        progress.finish_scan(endpoints_found);
        progress.finish_and_clear();
    }
}
