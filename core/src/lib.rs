//! Extraction and report formatting for explainshell.com pages.
//!
//! explainshell.com renders a shell command as a sequence of annotated
//! segments, each pointing at a block of man-page help text. This crate turns
//! that rendered page into a compact text report:
//!
//! - [`extract`] — parse the page into a [`ParsedExplanation`]: ordered
//!   [`CommandSegment`]s plus a help-id → help-text map.
//! - [`build_groups`] — regroup segments by shared help reference in order of
//!   first appearance ([`HelpGroup`]).
//! - [`format_report`] — render the groups as indented, human-readable text.
//! - [`render`] — render in any [`OutputFormat`] (text report, JSON, YAML).
//!
//! Text helpers ([`clean`], [`resolve_href`]) are exposed for callers that
//! post-process explainshell markup themselves.
//!
//! Network access lives in the `explainshell-fetch` crate; everything here is
//! pure and infallible over its input, apart from serialization in [`render`].
//!
//! # Example
//!
//! ```
//! use explainshell_core::{extract, format_report};
//!
//! let html = r#"
//! <div id="command"><span helpref="h1">ls</span></div>
//! <pre class="help-box" id="h1">list directory contents</pre>
//! "#;
//!
//! let parsed = extract(html);
//! assert_eq!(parsed.segments.len(), 1);
//! assert_eq!(
//!     format_report(&parsed),
//!     "ls\n\n    list directory contents"
//! );
//! ```

mod extract;
mod format;
mod output;
mod text;
mod types;

pub use extract::{extract, extract_with_origin};
pub use format::{build_groups, format_report};
pub use output::{OutputFormat, RenderError, render};
pub use text::{EXPLAINSHELL_ORIGIN, clean, resolve_href};
pub use types::*;
