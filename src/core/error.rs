use std::fmt;

/// Error types for endpoint-finder operations
#[derive(Debug)]
pub enum FinderError {
    /// IO error (wordlist and config file reads)
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// HTTP client construction error
    Http(reqwest::Error),

    /// Regex compilation error
    Regex(regex::Error),

    /// TOML parsing error
    TomlParsing(toml::de::Error),

    /// Missing required argument
    Usage(String),
}

impl fmt::Display for FinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinderError::Io(err) => write!(f, "IO error: {err}"),
            FinderError::Config(msg) => write!(f, "Configuration error: {msg}"),
            FinderError::Http(err) => write!(f, "HTTP error: {err}"),
            FinderError::Regex(err) => write!(f, "Regex error: {err}"),
            FinderError::TomlParsing(err) => write!(f, "TOML parsing error: {err}"),
            FinderError::Usage(msg) => write!(f, "Usage: {msg}"),
        }
    }
}

impl std::error::Error for FinderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FinderError::Io(err) => Some(err),
            FinderError::Http(err) => Some(err),
            FinderError::Regex(err) => Some(err),
            FinderError::TomlParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for FinderError {
    fn from(err: std::io::Error) -> Self {
        FinderError::Io(err)
    }
}

impl From<reqwest::Error> for FinderError {
    fn from(err: reqwest::Error) -> Self {
        FinderError::Http(err)
    }
}

impl From<regex::Error> for FinderError {
    fn from(err: regex::Error) -> Self {
        FinderError::Regex(err)
    }
}

impl From<toml::de::Error> for FinderError {
    fn from(err: toml::de::Error) -> Self {
        FinderError::TomlParsing(err)
    }
}

/// Type alias for Results using FinderError
pub type Result<T> = std::result::Result<T, FinderError>;
