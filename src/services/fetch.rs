// src/services/fetch.rs

//! Page fetcher for the pulses API.
//!
//! One GET per call, no retries; failures map onto [`FetchError`] and
//! the pagination driver decides what they mean for the run.

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::models::RawPage;

/// Header carrying the API credential.
const API_KEY_HEADER: &str = "X-OTX-API-KEY";

/// User agent sent on every request.
const USER_AGENT: &str = concat!("otx-sync/", env!("CARGO_PKG_VERSION"));

/// Fetches one page of pulses per call.
pub struct PulseFetcher {
    client: Client,
    base_url: String,
    api_key: String,
    page_limit: u32,
    modified_since: Option<String>,
}

impl PulseFetcher {
    /// Create a fetcher with a configured HTTP client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            page_limit: config.page_limit,
            modified_since: config.modified_since.clone(),
        })
    }

    /// Fetch a single page of pulses.
    ///
    /// The `modified_since` filter is attached only when configured; an
    /// unset filter never appears as an empty query parameter.
    pub async fn fetch_page(&self, page: u32) -> std::result::Result<RawPage, FetchError> {
        let mut request = self
            .client
            .get(&self.base_url)
            .header(API_KEY_HEADER, &self.api_key)
            .query(&[("limit", self.page_limit), ("page", page)]);

        if let Some(since) = &self.modified_since {
            request = request.query(&[("modified_since", since.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(FetchError::RateLimited { body });
            }
            return Err(FetchError::Status {
                code: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<RawPage>().await?)
    }
}
