//! Fetcher trait and the HTTP implementation.

use std::time::Duration;

use super::error::LoadError;

/// Request timeout for remote images.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Something that can download the bytes behind a URL.
///
/// The HTTP implementation is used at runtime; tests supply their own.
pub trait Fetcher {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Download the full response body.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError>;
}

/// Blocking HTTP(S) fetcher backed by reqwest.
///
/// The client is only built when a request is made, so constructing one for
/// a local file costs nothing.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            timeout: FETCH_TIMEOUT,
        }
    }

    fn client(&self) -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder()
            .user_agent(concat!("pixterm/", env!("CARGO_PKG_VERSION")))
            .timeout(self.timeout)
            .build()
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn name(&self) -> &'static str {
        "http"
    }

    fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        let fetch_error = |e: reqwest::Error| LoadError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        };

        tracing::debug!(url, timeout_secs = self.timeout.as_secs(), "Fetching image");
        let response = self
            .client()
            .and_then(|client| client.get(url).send())
            .map_err(fetch_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().map_err(fetch_error)?;
        Ok(bytes.to_vec())
    }
}
