//! Intermediate model extracted from an explainshell page.
//!
//! The types serialize with [`serde`] so the model can be emitted as JSON or
//! YAML alongside the plain-text report.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A shell expansion resolved by explainshell to its own detail page.
///
/// Produced for command substitutions, process substitutions and similar
/// constructs, and for help-referenced elements that wrap a bare link.
///
/// # Examples
///
/// ```
/// use explainshell_core::Expansion;
///
/// let exp = Expansion::new("date", "https://explainshell.com/explain?cmd=date");
/// assert_eq!(
///     exp.display_line(),
///     "    [ date -> https://explainshell.com/explain?cmd=date ]"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expansion {
    /// Cleaned text of the expanded command, as shown on the page.
    pub original_text: String,
    /// Absolute URL of the detail page.
    pub link: String,
}

impl Expansion {
    pub fn new(original_text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            original_text: original_text.into(),
            link: link.into(),
        }
    }

    /// Returns `true` when both the text and the link are non-empty.
    pub fn is_displayable(&self) -> bool {
        !self.original_text.is_empty() && !self.link.is_empty()
    }

    /// The indented `[ text -> link ]` line used in the text report.
    pub fn display_line(&self) -> String {
        format!("    [ {} -> {} ]", self.original_text, self.link)
    }
}

/// One fragment of the explained command line.
///
/// Segments keep the left-to-right order they have on the page. Several
/// segments may share a `help_ref` (e.g. repeated flags).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSegment {
    /// Cleaned display text.
    pub text: String,
    /// Identifier of the help block explaining this fragment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_ref: Option<String>,
    /// Expansion carried by this fragment, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expansion: Option<Expansion>,
}

impl CommandSegment {
    /// Creates a plain annotated segment.
    pub fn new(text: impl Into<String>, help_ref: Option<&str>) -> Self {
        Self {
            text: text.into(),
            help_ref: help_ref.map(String::from),
            expansion: None,
        }
    }

    /// Attaches an expansion.
    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = Some(expansion);
        self
    }

    /// Returns `true` if the segment has nothing worth keeping: no text and no
    /// expansion text.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
            && self
                .expansion
                .as_ref()
                .is_none_or(|exp| exp.original_text.is_empty())
    }
}

/// Everything extracted from one explainshell page.
///
/// # Examples
///
/// ```
/// use explainshell_core::{CommandSegment, ParsedExplanation};
///
/// let mut parsed = ParsedExplanation::default();
/// parsed.segments.push(CommandSegment::new("ls", Some("h1")));
/// parsed.help_texts.insert("h1".into(), "list directory contents".into());
///
/// assert_eq!(parsed.help_text("h1"), Some("list directory contents"));
/// assert_eq!(parsed.help_text("h2"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedExplanation {
    /// Command fragments in page order.
    pub segments: Vec<CommandSegment>,
    /// Help text keyed by help-reference id.
    pub help_texts: BTreeMap<String, String>,
}

impl ParsedExplanation {
    /// Looks up the help text for a reference id.
    pub fn help_text(&self, help_id: &str) -> Option<&str> {
        self.help_texts.get(help_id).map(String::as_str)
    }

    /// Returns `true` if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.help_texts.is_empty()
    }
}

/// Segments sharing one help reference, merged for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpGroup {
    pub help_id: String,
    /// Non-empty segment texts, in page order.
    pub command_texts: Vec<String>,
    /// Unique `[ text -> link ]` lines contributed by the group's segments.
    pub expansion_links: BTreeSet<String>,
    /// Index of the first segment carrying `help_id`.
    pub first_appearance_index: usize,
}

impl HelpGroup {
    pub fn new(help_id: impl Into<String>, first_appearance_index: usize) -> Self {
        Self {
            help_id: help_id.into(),
            command_texts: Vec::new(),
            expansion_links: BTreeSet::new(),
            first_appearance_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_segment_detection() {
        assert!(CommandSegment::new("", Some("h1")).is_blank());
        assert!(
            CommandSegment::new("", Some("h1"))
                .with_expansion(Expansion::new("", "https://x"))
                .is_blank()
        );
        assert!(
            !CommandSegment::new("", Some("h1"))
                .with_expansion(Expansion::new("date", ""))
                .is_blank()
        );
        assert!(!CommandSegment::new("ls", None).is_blank());
    }

    #[test]
    fn test_segment_json_omits_absent_fields() {
        let json = serde_json::to_value(CommandSegment::new("ls", None)).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "ls" }));
    }

    #[test]
    fn test_expansion_displayable_requires_text_and_link() {
        assert!(Expansion::new("a", "b").is_displayable());
        assert!(!Expansion::new("", "b").is_displayable());
        assert!(!Expansion::new("a", "").is_displayable());
    }
}
