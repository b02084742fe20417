//! Output formatting for extracted explanations.

use thiserror::Error;

use crate::format::format_report;
use crate::types::ParsedExplanation;

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Grouped, indented text report.
    #[default]
    Text,
    /// The extracted segments and help texts as pretty-printed JSON.
    Json,
    /// The extracted segments and help texts as YAML.
    Yaml,
}

/// Serialization failure while rendering a structured format.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders an extracted page in the requested format.
///
/// # Examples
///
/// ```
/// use explainshell_core::{CommandSegment, OutputFormat, ParsedExplanation, render};
///
/// let mut parsed = ParsedExplanation::default();
/// parsed.segments.push(CommandSegment::new("ls", Some("h1")));
///
/// assert_eq!(render(&parsed, OutputFormat::Text).unwrap(), "ls");
/// assert!(render(&parsed, OutputFormat::Json).unwrap().contains("\"help_ref\": \"h1\""));
/// ```
pub fn render(parsed: &ParsedExplanation, format: OutputFormat) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(format_report(parsed)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(parsed)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(parsed)?),
    }
}
