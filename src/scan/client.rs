use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tokio::time::Instant;

use crate::config::Config;
use crate::core::error::Result;
use crate::core::types::ProbeResult;
use crate::reporting::logging;

/// What a completed HTTP exchange told us about one path.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub elapsed_seconds: f64,
    pub byte_size: u64,
}

impl ProbeResponse {
    pub fn is_accepted(&self) -> bool {
        ProbeResult::is_accepted_status(self.status)
    }

    /// Turn the response into a stored result for `url`.
    pub fn into_result(self, url: String) -> ProbeResult {
        ProbeResult::new(
            url,
            self.status,
            self.content_type,
            self.elapsed_seconds,
            self.byte_size,
        )
    }
}

/// Full URL of a probe: the base URL and path are joined verbatim.
pub fn probe_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

#[async_trait]
pub trait Prober: Send + Sync {
    /// Probe `base_url + path`. `None` means the transport failed and
    /// nothing should be recorded.
    async fn probe(&self, base_url: &str, path: &str) -> Option<ProbeResponse>;
}

/// Prober backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
}

impl HttpProber {
    /// Build the client with the probe contract from `config`: request
    /// timeout, capped redirects, user agent, and no certificate checks.
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .redirect(Policy::limited(config.max_redirects()))
            .user_agent(config.user_agent())
            .danger_accept_invalid_certs(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, base_url: &str, path: &str) -> Option<ProbeResponse> {
        let url = probe_url(base_url, path);
        let start = Instant::now();

        let mut response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(err) => {
                logging::log_probe_failure(&url, &err);
                return None;
            }
        };

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned());

        // Drain the body chunk by chunk; only the decoded size is kept.
        let mut byte_size: u64 = 0;
        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => byte_size += chunk.len() as u64,
                Ok(None) => break,
                Err(err) => {
                    logging::log_probe_failure(&url, &err);
                    return None;
                }
            }
        }

        let elapsed_seconds = start.elapsed().as_secs_f64();
        logging::log_probe_result(&url, status, elapsed_seconds);

        Some(ProbeResponse {
            status,
            content_type,
            elapsed_seconds,
            byte_size,
        })
    }
}
