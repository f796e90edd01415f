use serde::Serialize;

use crate::core::constants::{http_status, probe};

/// Metadata of one probe whose transport completed and whose status was kept.
///
/// Fields are private so a result cannot change once a probe has produced
/// it; everything downstream only reads through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    url: String,
    status: u16,
    content_type: String,
    elapsed_seconds: f64,
    byte_size: u64,
}

impl ProbeResult {
    /// Create a new ProbeResult.
    ///
    /// A missing content type is stored as `"unknown"`.
    ///
    /// # Examples
    /// ```
    /// use endpoint_finder::ProbeResult;
    ///
    /// let result = ProbeResult::new("http://example.test/admin".to_string(), 403, None, 0.25, 512);
    /// assert_eq!(result.content_type(), "unknown");
    /// assert_eq!(result.status(), 403);
    /// ```
    pub fn new(
        url: String,
        status: u16,
        content_type: Option<String>,
        elapsed_seconds: f64,
        byte_size: u64,
    ) -> Self {
        Self {
            url,
            status,
            content_type: content_type
                .unwrap_or_else(|| probe::UNKNOWN_CONTENT_TYPE.to_string()),
            elapsed_seconds,
            byte_size,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed_seconds
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    /// Whether a probe with this status belongs in the report.
    ///
    /// Only 404 is discarded; every other completed exchange is interesting.
    pub fn is_accepted_status(status: u16) -> bool {
        status != http_status::NOT_FOUND
    }
}
