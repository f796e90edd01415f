//! Color and formatting utilities for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    pub const CYAN: &'static str = "\x1b[36m";

    // Bright colors
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_MAGENTA: &'static str = "\x1b[95m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Bold and colored, or plain text when formatting is unavailable
pub fn emphasize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}{}", Colors::BOLD, color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Color matching a status code class
pub fn status_color(status: u16) -> &'static str {
    match status {
        200..=299 => Colors::BRIGHT_GREEN,
        300..=399 => Colors::BRIGHT_CYAN,
        400..=499 => Colors::BRIGHT_YELLOW,
        500..=599 => Colors::BRIGHT_MAGENTA,
        _ => Colors::BRIGHT_WHITE,
    }
}

/// Terminal capability detection
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Report text may be piped into other tools
    if !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !(term == "dumb" || term.is_empty()),
        Err(_) => false,
    }
}
