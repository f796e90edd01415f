//! Report formatting and display logic for endpoint-finder

use serde_json::json;
use std::fmt::Write;

use crate::core::constants::{display, output_formats};
use crate::core::types::ProbeResult;
use crate::scan::ScanSummary;
use crate::ui::color::{Colors, colorize, emphasize, status_color};

/// Banner printed before probing starts
pub fn render_banner(base_url: &str, path_count: usize) -> String {
    format!(
        "Scanning {} ({} paths)",
        colorize(base_url, Colors::CYAN),
        path_count
    )
}

/// Render the finished scan in the requested format
pub fn render_report(summary: &ScanSummary, output_format: &str) -> String {
    match output_format {
        output_formats::MINIMAL => render_minimal(summary),
        output_formats::JSON => render_json(summary),
        _ => render_text(summary),
    }
}

/// Print the finished scan in the requested format
pub fn display_report(summary: &ScanSummary, output_format: &str) {
    print!("{}", render_report(summary, output_format));
}

fn status_emoji(status: u16) -> &'static str {
    match status {
        200..=299 => display::SUCCESS_EMOJI,
        300..=399 => display::REDIRECT_EMOJI,
        400..=499 => display::CLIENT_ERROR_EMOJI,
        500..=599 => display::SERVER_ERROR_EMOJI,
        _ => display::OTHER_EMOJI,
    }
}

/// Grouped report: totals first, then one block per status code
fn render_text(summary: &ScanSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "\nScan completed in {:.3} seconds ({} paths)",
        summary.elapsed_seconds, summary.paths_scanned
    );
    let _ = writeln!(
        out,
        "Found {} accessible endpoints\n",
        emphasize(&summary.endpoints_found().to_string(), Colors::BRIGHT_WHITE)
    );

    for (status, results) in &summary.groups {
        let header = format!("=== Status {status} ===");
        let _ = if crate::ui::color::supports_formatting() {
            writeln!(
                out,
                "{} {}",
                status_emoji(*status),
                emphasize(&header, status_color(*status))
            )
        } else {
            writeln!(out, "{header}")
        };

        for result in results {
            render_text_entry(&mut out, result);
        }
    }

    out
}

fn render_text_entry(out: &mut String, result: &ProbeResult) {
    let _ = writeln!(
        out,
        "{} ({:.3}s)",
        colorize(result.url(), Colors::CYAN),
        result.elapsed_seconds()
    );
    let _ = writeln!(
        out,
        "{}\n",
        colorize(
            &format!(
                "Type: {} | Size: {} bytes",
                result.content_type(),
                result.byte_size()
            ),
            Colors::DIM
        )
    );
}

/// One `<status> <url>` line per endpoint, no colors
fn render_minimal(summary: &ScanSummary) -> String {
    summary
        .results()
        .map(|result| format!("{} {}\n", result.status(), result.url()))
        .collect()
}

fn render_json(summary: &ScanSummary) -> String {
    let groups: Vec<_> = summary
        .groups
        .iter()
        .map(|(status, results)| json!({ "status": status, "results": results }))
        .collect();

    let document = json!({
        "target": summary.target,
        "paths_scanned": summary.paths_scanned,
        "elapsed_seconds": summary.elapsed_seconds,
        "endpoints_found": summary.endpoints_found(),
        "scanned_at": chrono::Utc::now().to_rfc3339(),
        "groups": groups,
    });

    format!("{document}\n")
}
