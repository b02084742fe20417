//! Regrouping of segments by help reference and text report rendering.

use std::collections::HashMap;

use crate::types::{HelpGroup, ParsedExplanation};

const FRAGMENT_SEPARATOR: &str = " [...] ";
const INDENT: &str = "    ";

/// Groups annotated segments by help reference, ordered by first appearance.
///
/// Segments without a help reference are left out. Within a group, command
/// texts keep page order and identical expansion lines are stored once.
///
/// # Examples
///
/// ```
/// use explainshell_core::{CommandSegment, ParsedExplanation, build_groups};
///
/// let parsed = ParsedExplanation {
///     segments: vec![
///         CommandSegment::new("ls", Some("h1")),
///         CommandSegment::new("|", Some("pipe")),
///         CommandSegment::new("-la", Some("h1")),
///     ],
///     ..Default::default()
/// };
///
/// let groups = build_groups(&parsed);
/// assert_eq!(groups[0].help_id, "h1");
/// assert_eq!(groups[0].command_texts.join(" [...] "), "ls [...] -la");
/// assert_eq!(groups[1].first_appearance_index, 1);
/// ```
pub fn build_groups(parsed: &ParsedExplanation) -> Vec<HelpGroup> {
    let mut groups: Vec<HelpGroup> = Vec::new();
    let mut by_id: HashMap<&str, usize> = HashMap::new();

    for (index, segment) in parsed.segments.iter().enumerate() {
        let Some(help_id) = segment.help_ref.as_deref().filter(|id| !id.is_empty()) else {
            continue;
        };

        let slot = *by_id.entry(help_id).or_insert_with(|| {
            groups.push(HelpGroup::new(help_id, index));
            groups.len() - 1
        });
        let group = &mut groups[slot];

        let text = segment.text.trim();
        if !text.is_empty() {
            group.command_texts.push(text.to_string());
        }

        if let Some(expansion) = segment.expansion.as_ref().filter(|e| e.is_displayable()) {
            group.expansion_links.insert(expansion.display_line());
        }
    }

    groups.sort_by_key(|group| group.first_appearance_index);
    groups
}

/// Renders the text report for an extracted page.
///
/// Per group: the joined command fragments, then the help text indented by
/// four spaces, then any expansion links, each block followed by a blank
/// line. The final string is trimmed.
///
/// # Examples
///
/// ```
/// use explainshell_core::{CommandSegment, ParsedExplanation, format_report};
///
/// let mut parsed = ParsedExplanation::default();
/// parsed.segments.push(CommandSegment::new("ls", Some("h1")));
/// parsed.help_texts.insert("h1".into(), "list directory contents".into());
///
/// assert_eq!(format_report(&parsed), "ls\n\n    list directory contents");
/// ```
pub fn format_report(parsed: &ParsedExplanation) -> String {
    let mut out = String::new();

    for group in build_groups(parsed) {
        if !group.command_texts.is_empty() {
            out.push_str(&group.command_texts.join(FRAGMENT_SEPARATOR));
            out.push_str("\n\n");
        }

        if let Some(help) = parsed.help_text(&group.help_id).filter(|h| !h.is_empty()) {
            out.push_str(&indent(help));
            out.push_str("\n\n");
        }

        if !group.expansion_links.is_empty() {
            for link in &group.expansion_links {
                out.push_str(link);
                out.push('\n');
            }
            out.push('\n');
        }
    }

    out.trim().to_string()
}

fn indent(text: &str) -> String {
    text.split('\n')
        .map(|line| format!("{INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
