// src/core/net.rs

// Blocking HTTP GET. One call per page; no retries.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};
use crate::error::FetchError;

pub struct Http {
    client: Client,
}

impl Http {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Client with the compiled-in timeout.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(Duration::from_secs(HTTP_TIMEOUT_SECS))
    }

    /// Fetch `url` and return the body text. Non-2xx is an error.
    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        logd!("Net: GET {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|source| FetchError::Request { url: s!(url), source })?;

        let status = resp.status();
        if !status.is_success() {
            logw!("Net: {} → HTTP {}", url, status);
            return Err(FetchError::Status { url: s!(url), status: status.as_u16() });
        }

        resp.text().map_err(|source| FetchError::Request { url: s!(url), source })
    }
}
