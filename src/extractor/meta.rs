//! `<meta>` tag extraction.

use crate::category::Category;
use crate::cleaning::clean_text;
use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::records::MetaRecord;

use super::{check_depth, Harvest};

/// Every `<meta>` element, whatever attributes it carries.
#[must_use]
pub fn extract_meta(page: &Page, opts: &Options) -> Harvest<MetaRecord> {
    let mut harvest = Harvest::new(Category::Meta);

    for (idx, node) in page.select("meta").nodes().iter().enumerate() {
        let meta = Selection::from(*node);
        if let Err(e) = check_depth(&meta, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        harvest.push(MetaRecord {
            position: idx + 1,
            name: dom::attr_or_empty(&meta, "name"),
            property: dom::attr_or_empty(&meta, "property"),
            content: clean_text(&dom::attr_or_empty(&meta, "content")),
            http_equiv: dom::attr_or_empty(&meta, "http-equiv"),
        });
    }

    harvest
}
