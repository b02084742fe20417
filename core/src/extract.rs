//! Extraction of command segments and help text from explainshell markup.
//!
//! The page layout this relies on:
//!
//! - `pre.help-box[id]` — one block of help text per help-reference id.
//! - `div#command` — the rendered command line. Every element inside it that
//!   carries a `helpref` attribute becomes a [`CommandSegment`], including
//!   elements nested inside other annotated elements.
//! - `span.expansion-substitution > a[href]` — an expanded subcommand with its
//!   own detail page.
//!
//! Unexpected markup never fails: missing regions just produce empty
//! collections.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use tracing::debug;

use crate::text::{EXPLAINSHELL_ORIGIN, clean, resolve_href};
use crate::types::{CommandSegment, Expansion, ParsedExplanation};

static HELP_BOX: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("pre.help-box").expect("static selector must parse"));
static ANNOTATED: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("div#command [helpref]").expect("static selector must parse")
});
static LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("static selector must parse"));

const EXPANSION_CLASS: &str = "expansion-substitution";

/// Extracts segments and help texts, resolving relative links against
/// [`EXPLAINSHELL_ORIGIN`].
///
/// # Examples
///
/// ```
/// use explainshell_core::extract;
///
/// let html = r#"
/// <div id="command">
///   <span helpref="h0">echo</span>
///   <span helpref="h1"><span class="expansion-substitution"><a href="/explain?cmd=date">date</a></span></span>
/// </div>
/// <pre class="help-box" id="h0">display a line of text</pre>
/// "#;
///
/// let parsed = extract(html);
/// assert_eq!(parsed.segments[0].text, "echo");
/// let expansion = parsed.segments[1].expansion.as_ref().unwrap();
/// assert_eq!(expansion.link, "https://explainshell.com/explain?cmd=date");
/// assert_eq!(parsed.help_text("h0"), Some("display a line of text"));
/// ```
pub fn extract(markup: &str) -> ParsedExplanation {
    extract_with_origin(markup, EXPLAINSHELL_ORIGIN)
}

/// Like [`extract`], but resolves root-relative links against `origin`.
pub fn extract_with_origin(markup: &str, origin: &str) -> ParsedExplanation {
    let document = Html::parse_document(markup);

    let help_texts = collect_help_texts(&document);
    let segments: Vec<CommandSegment> = document
        .select(&ANNOTATED)
        .filter_map(|element| segment_from_element(element, origin))
        .collect();

    debug!(
        segments = segments.len(),
        help_blocks = help_texts.len(),
        "Extracted explanation"
    );

    ParsedExplanation {
        segments,
        help_texts,
    }
}

fn collect_help_texts(document: &Html) -> BTreeMap<String, String> {
    let mut help_texts = BTreeMap::new();
    for block in document.select(&HELP_BOX) {
        let Some(id) = block.value().attr("id") else {
            continue;
        };
        // Duplicate ids: the last block wins.
        let text: String = block.text().collect();
        help_texts.insert(id.to_string(), text.trim().to_string());
    }
    help_texts
}

fn segment_from_element(element: ElementRef<'_>, origin: &str) -> Option<CommandSegment> {
    let mut text = String::new();
    let mut expansion = None;

    for child in element.children() {
        match child.value() {
            Node::Text(fragment) => text.push_str(fragment),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                if is_expansion_wrapper(child) {
                    if let Some((original_text, found)) = expansion_from_wrapper(child, origin) {
                        text.push_str(&original_text);
                        if found.is_some() {
                            expansion = found;
                        }
                    }
                } else {
                    text.extend(child.text());
                }
            }
            _ => {}
        }
    }

    let expansion = expansion.or_else(|| direct_link_expansion(element, origin));
    let segment = CommandSegment {
        text: clean(&text),
        help_ref: element.value().attr("helpref").map(String::from),
        expansion,
    };

    (!segment.is_blank()).then_some(segment)
}

fn is_expansion_wrapper(element: ElementRef<'_>) -> bool {
    element.value().name() == "span"
        && element
            .value()
            .classes()
            .any(|class| class == EXPANSION_CLASS)
}

/// Returns the wrapper's cleaned link text, plus an expansion when the first
/// link has an href. `None` when the wrapper holds no link at all.
fn expansion_from_wrapper(
    wrapper: ElementRef<'_>,
    origin: &str,
) -> Option<(String, Option<Expansion>)> {
    let links: Vec<ElementRef<'_>> = wrapper.select(&LINK).collect();
    let first = links.first()?;

    let raw: String = links.iter().flat_map(|link| link.text()).collect();
    let original_text = clean(&raw);
    let expansion = first
        .value()
        .attr("href")
        .filter(|href| !href.is_empty())
        .map(|href| Expansion::new(original_text.clone(), resolve_href(href, origin)));

    Some((original_text, expansion))
}

/// Fallback for annotated elements that wrap a bare `<a>` instead of an
/// expansion wrapper.
fn direct_link_expansion(element: ElementRef<'_>, origin: &str) -> Option<Expansion> {
    let link = element
        .children()
        .filter_map(ElementRef::wrap)
        .find(|child| child.value().name() == "a")?;
    let href = link.value().attr("href").filter(|href| !href.is_empty())?;
    let raw: String = link.text().collect();

    Some(Expansion::new(clean(&raw), resolve_href(href, origin)))
}
