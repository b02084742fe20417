//! HTTP access to explainshell.com.
//!
//! [`Fetcher`] issues a single GET against `<origin>/explain?cmd=<command>`
//! and hands the markup to `explainshell-core` for extraction and formatting.
//! Failures surface as [`FetchError`], always naming the requested URL.
//!
//! # Example
//!
//! ```no_run
//! # async fn run() -> Result<(), explainshell_fetch::FetchError> {
//! let report = explainshell_fetch::explain("ls -la").await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;

pub use client::Fetcher;
pub use config::FetchConfig;
pub use error::{FetchError, Result};

/// Fetches the raw explanation page for `command` from explainshell.com.
pub async fn fetch(command: &str) -> Result<String> {
    Fetcher::default().fetch(command).await
}

/// Fetches and formats the text report for `command` from explainshell.com.
pub async fn explain(command: &str) -> Result<String> {
    Fetcher::default().explain(command).await
}
