//! Endpoint configuration for the explanation service.

use explainshell_core::EXPLAINSHELL_ORIGIN;
use reqwest::Url;

use crate::error::{FetchError, Result};

/// Where explanation pages are fetched from.
///
/// # Examples
///
/// ```
/// use explainshell_fetch::FetchConfig;
///
/// let url = FetchConfig::default().endpoint("ls -la").unwrap();
/// assert_eq!(url.as_str(), "https://explainshell.com/explain?cmd=ls+-la");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Scheme and host of the service, e.g. `https://explainshell.com`.
    pub origin: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            origin: EXPLAINSHELL_ORIGIN.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
        }
    }

    /// Builds `<origin>/explain?cmd=<command>` with the command URL-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUrl`](FetchError::InvalidUrl) if the origin is not an
    /// absolute http(s) URL.
    pub fn endpoint(&self, command: &str) -> Result<Url> {
        let base = format!("{}/explain", self.origin.trim_end_matches('/'));
        let mut url = Url::parse(&base).map_err(|err| FetchError::InvalidUrl {
            url: base.clone(),
            reason: err.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(FetchError::InvalidUrl {
                url: base,
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        url.query_pairs_mut().append_pair("cmd", command);
        Ok(url)
    }
}
