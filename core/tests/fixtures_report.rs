use std::fs;
use std::path::PathBuf;

use explainshell_core::{Expansion, OutputFormat, ParsedExplanation, extract, format_report, render};

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

#[test]
fn test_minimal_page_report() {
    let html = r#"<html><body>
<div id="command"><span helpref="h1">ls</span></div>
<pre class="help-box" id="h1">list directory contents</pre>
</body></html>"#;

    assert_eq!(
        format_report(&extract(html)),
        "ls\n\n    list directory contents"
    );
}

#[test]
fn test_ls_fixture_report() {
    let parsed = extract(&fixture("ls-la.html"));

    let expected = "\
ls

    ls(1) - list directory contents

    [ ls -> https://explainshell.com/explain/1/ls ]

-l

    -l     use a long listing format

a

    -a, --all
           do not ignore entries starting with .";

    assert_eq!(format_report(&parsed), expected);
}

#[test]
fn test_pipeline_fixture_with_expansions_and_missing_help() {
    let parsed = extract(&fixture("echo-date-grep.html"));

    assert_eq!(parsed.segments.len(), 5);
    assert_eq!(parsed.segments[1].text, "$(date)");
    assert_eq!(
        parsed.segments[1].expansion,
        Some(Expansion::new(
            "date",
            "https://explainshell.com/explain?cmd=date"
        ))
    );
    assert!(parsed.help_text("help-3").is_none());

    let expected = "\
echo

    echo - display a line of text

    [ echo -> https://explainshell.com/explain/1/echo ]

$(date)

    command substitution

    [ date -> https://explainshell.com/explain?cmd=date ]

|

    A pipeline is a sequence of one or more commands separated by the control operator |.

grep

    grep, egrep, fgrep - print lines matching a pattern

    [ grep -> https://explainshell.com/explain/1/grep ]

2026";

    assert_eq!(format_report(&parsed), expected);
}

#[test]
fn test_repeated_help_refs_are_merged_in_first_appearance_order() {
    let parsed = extract(&fixture("find-repeated.html"));

    // The whitespace-only help-9 segment is dropped during extraction.
    assert!(
        parsed
            .segments
            .iter()
            .all(|s| s.help_ref.as_deref() != Some("help-9"))
    );
    assert_eq!(parsed.help_text("help-2").map(|h| h.starts_with("expr1")), Some(true));

    let expected = "\
find

    search for files in a directory hierarchy

    [ find -> https://explainshell.com/explain/1/find ]

.

    starting-point

-name a [...] -name b

    -name pattern
           Base of file name matches shell pattern pattern.

-o

    expr1 -o expr2
           Or; expr2 is not evaluated if expr1 is true.";

    assert_eq!(format_report(&parsed), expected);
}

#[test]
fn test_fixture_reports_are_idempotent() {
    for name in ["ls-la.html", "echo-date-grep.html", "find-repeated.html"] {
        let html = fixture(name);
        assert_eq!(
            format_report(&extract(&html)),
            format_report(&extract(&html)),
            "report for {name} should be stable"
        );
    }
}

#[test]
fn test_groups_follow_first_appearance_for_every_fixture() {
    for name in ["ls-la.html", "echo-date-grep.html", "find-repeated.html"] {
        let parsed = extract(&fixture(name));
        let groups = explainshell_core::build_groups(&parsed);
        assert!(
            groups
                .windows(2)
                .all(|w| w[0].first_appearance_index < w[1].first_appearance_index),
            "groups out of order for {name}"
        );
        for group in &groups {
            let first = parsed
                .segments
                .iter()
                .position(|s| s.help_ref.as_deref() == Some(group.help_id.as_str()));
            assert_eq!(first, Some(group.first_appearance_index));
        }
    }
}

#[test]
fn test_json_output_round_trips_fixture_model() {
    let parsed = extract(&fixture("echo-date-grep.html"));
    let json = render(&parsed, OutputFormat::Json).expect("JSON render");
    let back: ParsedExplanation = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(back, parsed);
}
