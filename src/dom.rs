//! DOM query adapter.
//!
//! Thin read-only helpers over the `dom_query` crate. Extractors never mutate
//! the document, so only attribute, text and tree-navigation queries live
//! here. Missing attributes read as empty strings throughout.

use std::collections::BTreeMap;

// Re-export core types for external use
pub use dom_query::{Document, NodeId, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// Tags whose text never counts as page text.
const NON_TEXT_TAGS: &[&str] = &["script", "style", "noscript", "template"];

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get an attribute value, or an empty string when absent.
#[inline]
#[must_use]
pub fn attr_or_empty(sel: &Selection, name: &str) -> String {
    get_attribute(sel, name).unwrap_or_default()
}

/// Check if attribute exists (boolean attributes count by presence)
#[inline]
#[must_use]
pub fn has_attribute(sel: &Selection, name: &str) -> bool {
    sel.has_attr(name)
}

/// Get all attributes as key-value pairs, in source order.
///
/// Returns empty vector if node has no attributes or if selection is empty.
#[must_use]
pub fn get_all_attributes(sel: &Selection) -> Vec<(String, String)> {
    sel.nodes()
        .first()
        .map(|node| {
            node.attrs()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect()
        })
        .unwrap_or_default()
}

/// Collect `data-*` attributes keyed by full attribute name.
#[must_use]
pub fn data_attributes(sel: &Selection) -> BTreeMap<String, String> {
    get_all_attributes(sel)
        .into_iter()
        .filter(|(name, _)| name.starts_with("data-"))
        .collect()
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

/// Check whether the first node of a selection has the given tag.
#[must_use]
pub fn is_tag(sel: &Selection, tag: &str) -> bool {
    tag_name(sel).is_some_and(|t| t.eq_ignore_ascii_case(tag))
}

/// Node id of the first node in a selection.
#[must_use]
pub fn node_id(sel: &Selection) -> Option<NodeId> {
    sel.nodes().first().map(|node| node.id)
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Text of the whole page, one space after every text node.
///
/// Script, style, noscript and template contents are skipped so inline JSON
/// and CSS never feed the pattern scans.
#[must_use]
pub fn page_text(doc: &Document) -> String {
    let root = doc.select("html");
    let Some(root_node) = root.nodes().first() else {
        return String::new();
    };

    let mut out = String::new();
    for node in root_node.descendants() {
        if !node.is_text() {
            continue;
        }
        let hidden = node
            .parent()
            .and_then(|parent| parent.node_name())
            .is_some_and(|tag| NON_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
        if hidden {
            continue;
        }
        out.push_str(&node.text());
        out.push(' ');
    }
    out
}

// === Tree Navigation ===

/// Direct element children
#[inline]
#[must_use]
pub fn children<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.children()
}

/// Get previous element sibling (skipping text nodes)
#[must_use]
pub fn previous_element_sibling<'a>(sel: &Selection<'a>) -> Option<Selection<'a>> {
    sel.nodes().first().and_then(|node| {
        let mut sibling = node.prev_sibling();
        while let Some(s) = sibling {
            if s.is_element() {
                return Some(Selection::from(s));
            }
            sibling = s.prev_sibling();
        }
        None
    })
}

/// Nearest ancestor with the given tag, not crossing an ancestor tagged `stop`.
#[must_use]
pub fn closest_ancestor<'a>(sel: &Selection<'a>, tag: &str, stop: Option<&str>) -> Option<Selection<'a>> {
    let mut current = sel.nodes().first().and_then(NodeRef::parent);
    while let Some(node) = current {
        if let Some(name) = node.node_name() {
            if name.eq_ignore_ascii_case(tag) {
                return Some(Selection::from(node));
            }
            if stop.is_some_and(|s| name.eq_ignore_ascii_case(s)) {
                return None;
            }
        }
        current = node.parent();
    }
    None
}

/// Number of ancestors above the first node of a selection.
#[must_use]
pub fn depth(sel: &Selection) -> usize {
    let mut count = 0;
    let mut current = sel.nodes().first().and_then(NodeRef::parent);
    while let Some(node) = current {
        count += 1;
        current = node.parent();
    }
    count
}

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attributes_read_empty() {
        let doc = parse(r#"<div id="main">no class</div>"#);
        let div = doc.select("div");

        assert_eq!(attr_or_empty(&div, "id"), "main");
        assert_eq!(attr_or_empty(&div, "class"), "");
        assert_eq!(get_attribute(&div, "data-test"), None);
    }

    #[test]
    fn test_boolean_attribute_presence() {
        let doc = parse(r#"<input required disabled="false">"#);
        let input = doc.select("input");

        assert!(has_attribute(&input, "required"));
        assert!(has_attribute(&input, "disabled"));
        assert!(!has_attribute(&input, "readonly"));
    }

    #[test]
    fn test_data_attributes_only() {
        let doc = parse(r#"<input name="q" data-track="search" data-id="7" class="x">"#);
        let attrs = data_attributes(&doc.select("input"));

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("data-track").map(String::as_str), Some("search"));
        assert_eq!(attrs.get("data-id").map(String::as_str), Some("7"));
    }

    #[test]
    fn test_previous_element_sibling_skips_text() {
        let doc = parse(r#"<div><label id="l">Name</label>  <input id="i"></div>"#);
        let prev = previous_element_sibling(&doc.select("#i"));

        assert!(prev.is_some_and(|p| is_tag(&p, "label")));
        assert!(previous_element_sibling(&doc.select("#l")).is_none());
    }

    #[test]
    fn test_closest_ancestor_respects_stop() {
        let doc = parse(r#"<label><form><span><input id="i"></span></form></label>"#);
        let input = doc.select("#i");

        assert!(closest_ancestor(&input, "span", Some("form")).is_some());
        assert!(closest_ancestor(&input, "label", Some("form")).is_none());
        assert!(closest_ancestor(&input, "form", None).is_some());
    }

    #[test]
    fn test_depth_grows_with_nesting() {
        let doc = parse("<div><div><p id='p'>x</p></div></div>");
        let shallow = depth(&doc.select("body"));
        let deep = depth(&doc.select("#p"));

        assert_eq!(deep, shallow + 3);
    }

    #[test]
    fn test_page_text_skips_scripts() {
        let doc = parse(
            r#"<html><body><p>Call 555-123-4567</p><script>var e = "x@y.com";</script></body></html>"#,
        );
        let text = page_text(&doc);

        assert!(text.contains("Call 555-123-4567"));
        assert!(!text.contains("x@y.com"));
    }

    #[test]
    fn test_tag_name() {
        let doc = parse(r#"<article><section>content</section></article>"#);

        assert_eq!(tag_name(&doc.select("article")), Some("article".to_string()));
        assert!(is_tag(&doc.select("section"), "SECTION"));
    }
}
