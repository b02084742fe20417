//! Single-request client for explanation pages.

use explainshell_core::{ParsedExplanation, extract_with_origin, format_report};
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{FetchError, Result};

/// Fetches explanation pages with one GET per call: no retries, no caching,
/// transport-default timeouts.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Returns the raw page markup for `command`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] naming the requested URL on transport
    /// failure, non-2xx status, or an unreadable body.
    pub async fn fetch(&self, command: &str) -> Result<String> {
        let url = self.config.endpoint(command)?;
        let url_text = url.to_string();
        debug!(url = %url_text, "Fetching explanation");

        let response = self.client.get(url).send().await.map_err(|source| {
            warn!(url = %url_text, error = %source, "Explanation request failed");
            FetchError::Request {
                url: url_text.clone(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url_text, %status, "Explanation service returned an error status");
            return Err(FetchError::Status {
                url: url_text,
                status,
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url_text.clone(),
            source,
        })?;
        debug!(url = %url_text, bytes = body.len(), "Fetched explanation");
        Ok(body)
    }

    /// Fetches and extracts the page, resolving relative links against the
    /// configured origin.
    pub async fn fetch_explanation(&self, command: &str) -> Result<ParsedExplanation> {
        let markup = self.fetch(command).await?;
        Ok(extract_with_origin(&markup, &self.config.origin))
    }

    /// Fetches, extracts and formats the text report for `command`.
    pub async fn explain(&self, command: &str) -> Result<String> {
        let parsed = self.fetch_explanation(command).await?;
        Ok(format_report(&parsed))
    }
}
