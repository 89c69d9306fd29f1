//! Anchor extraction.

use crate::category::Category;
use crate::cleaning::{clean_class_list, clean_text};
use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::records::LinkRecord;

use super::{check_depth, Harvest};

/// Whether a resolved URL does not contain the page's origin.
///
/// Without a known origin nothing counts as external.
#[must_use]
pub fn is_external(url: &str, base_origin: &str) -> bool {
    !url.contains(base_origin)
}

/// Every `<a>` carrying an `href`.
#[must_use]
pub fn extract_links(page: &Page, opts: &Options) -> Harvest<LinkRecord> {
    let mut harvest = Harvest::new(Category::Links);

    for (idx, node) in page.select("a[href]").nodes().iter().enumerate() {
        let anchor = Selection::from(*node);
        if let Err(e) = check_depth(&anchor, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        let url = page.resolve(&dom::attr_or_empty(&anchor, "href"));
        harvest.push(LinkRecord {
            position: idx + 1,
            is_external: is_external(&url, page.base_origin()),
            url,
            text: clean_text(&dom::text_content(&anchor)),
            title: clean_text(&dom::attr_or_empty(&anchor, "title")),
            rel: clean_class_list(&dom::attr_or_empty(&anchor, "rel")),
            target: dom::attr_or_empty(&anchor, "target"),
        });
    }

    harvest
}
