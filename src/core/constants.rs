/// Application-wide constants to avoid magic values throughout the codebase.
///
/// The probe contract (timeout, redirect cap, batch width, user agent) lives
/// here so that config defaults, CLI help and the engine agree on one value.
/// Output format constants
pub mod output_formats {
    /// Text output format - grouped report with colors when supported
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - one `<status> <url>` line per endpoint
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// HTTP status code constants
pub mod http_status {
    /// HTTP 404 Not Found - the only status a probe discards
    pub const NOT_FOUND: u16 = 404;
}

/// Probe contract defaults
pub mod probe {
    /// Per-request timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 8;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Redirect hops followed before giving up
    pub const DEFAULT_MAX_REDIRECTS: usize = 5;
    /// Upper bound accepted for the redirect cap
    pub const MAX_REDIRECTS_LIMIT: usize = 50;
    /// Browser-like user agent sent with every probe
    pub const DEFAULT_USER_AGENT: &str =
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
    /// Content type recorded when the response carries none
    pub const UNKNOWN_CONTENT_TYPE: &str = "unknown";
}

/// Concurrency engine defaults
pub mod engine {
    /// Probes started together before waiting on the batch
    pub const DEFAULT_BATCH_SIZE: usize = 20;
    /// Upper bound accepted for the batch size
    pub const MAX_BATCH_SIZE: usize = 1000;
}

/// Wordlist file constants
pub mod wordlist {
    /// First character that marks a comment line
    pub const COMMENT_MARKER: char = '#';
    /// Line matcher selecting non-empty lines; comments are dropped afterwards
    pub const NON_EMPTY_LINE_PATTERN: &str = ".";
}

/// Display and formatting constants
pub mod display {
    /// Emoji for 2xx groups
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for 3xx groups
    pub const REDIRECT_EMOJI: &str = "🔄";
    /// Emoji for 4xx groups
    pub const CLIENT_ERROR_EMOJI: &str = "🚫";
    /// Emoji for 5xx groups
    pub const SERVER_ERROR_EMOJI: &str = "💥";
    /// Emoji for anything else
    pub const OTHER_EMOJI: &str = "❓";
}
