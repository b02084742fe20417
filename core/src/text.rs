//! Text cleanup and link resolution for extracted markup.

use std::sync::LazyLock;

use regex::Regex;

/// Origin of the explainshell service; relative links are resolved against it.
pub const EXPLAINSHELL_ORIGIN: &str = "https://explainshell.com";

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex must compile"));

/// Normalizes a fragment of page text for display.
///
/// Strips `(1)` footnote markers, turns non-breaking spaces (literal
/// `&nbsp;` or U+00A0) into plain spaces, collapses whitespace runs and trims.
///
/// # Examples
///
/// ```
/// use explainshell_core::clean;
///
/// assert_eq!(clean("foo(1)  bar\n baz"), "foo bar baz");
/// assert_eq!(clean("a&nbsp;b"), "a b");
/// ```
pub fn clean(text: &str) -> String {
    let text = text
        .replace("(1)", "")
        .replace("&nbsp;", " ")
        .replace('\u{a0}', " ");
    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Makes a root-relative href absolute against `origin`; anything else is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use explainshell_core::{EXPLAINSHELL_ORIGIN, resolve_href};
///
/// assert_eq!(
///     resolve_href("/explain/foo", EXPLAINSHELL_ORIGIN),
///     "https://explainshell.com/explain/foo"
/// );
/// assert_eq!(
///     resolve_href("https://example.com/x", EXPLAINSHELL_ORIGIN),
///     "https://example.com/x"
/// );
/// ```
pub fn resolve_href(href: &str, origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{href}", origin.trim_end_matches('/'))
    } else {
        href.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_footnotes_and_collapses_whitespace() {
        assert_eq!(clean("foo(1)  bar\n baz"), "foo bar baz");
        assert_eq!(clean("\n\t  ls(1)\n"), "ls");
    }

    #[test]
    fn test_clean_handles_nbsp_forms() {
        assert_eq!(clean("a&nbsp;b"), "a b");
        assert_eq!(clean("a\u{a0}\u{a0}b"), "a b");
    }

    #[test]
    fn test_clean_keeps_other_parenthesized_numbers() {
        assert_eq!(clean("grep(2) x"), "grep(2) x");
    }

    #[test]
    fn test_clean_whitespace_only_is_empty() {
        assert_eq!(clean(" \n\t "), "");
    }

    #[test]
    fn test_resolve_href_tolerates_trailing_slash_origin() {
        assert_eq!(
            resolve_href("/explain?cmd=date", "http://127.0.0.1:8080/"),
            "http://127.0.0.1:8080/explain?cmd=date"
        );
    }

    #[test]
    fn test_resolve_href_leaves_relative_paths_alone() {
        assert_eq!(resolve_href("explain/foo", EXPLAINSHELL_ORIGIN), "explain/foo");
    }
}
