//! The "GET a URL, return parsed JSON" seam the organization client talks through.
//!
//! [`HttpFetcher`] is the real implementation backed by a blocking `reqwest`
//! client. Tests substitute their own [`JsonFetcher`] to control payloads and
//! observe which URLs were requested.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Fetch a URL and return its body parsed as JSON.
pub trait JsonFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value>;
}

impl<F: JsonFetcher + ?Sized> JsonFetcher for &F {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        (**self).fetch_json(url)
    }
}

/// Performs exactly one GET per call. No retries.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher. `timeout` of `None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("gh-org/", env!("CARGO_PKG_VERSION"))),
        );
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }
}

impl JsonFetcher for HttpFetcher {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        let transport = |source| ClientError::Transport {
            url: url.to_string(),
            source,
        };

        let body = self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes())
            .map_err(transport)?;

        serde_json::from_slice(&body).map_err(|source| ClientError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
