//! Heading extraction.

use crate::category::Category;
use crate::cleaning::{clean_class_list, clean_text};
use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::patterns::HEADING_SELECTOR;
use crate::records::TitleRecord;

use super::{check_depth, Harvest};

/// Every `h1`..`h6` in document order.
///
/// Positions count all headings, so an empty heading leaves a gap instead of
/// shifting later positions.
#[must_use]
pub fn extract_titles(page: &Page, opts: &Options) -> Harvest<TitleRecord> {
    let mut harvest = Harvest::new(Category::Titles);

    for (idx, node) in page.select(HEADING_SELECTOR).nodes().iter().enumerate() {
        let heading = Selection::from(*node);
        if let Err(e) = check_depth(&heading, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        let text = clean_text(&dom::text_content(&heading));
        if text.is_empty() {
            continue;
        }

        let level = dom::tag_name(&heading).unwrap_or_default().to_ascii_uppercase();
        harvest.push(TitleRecord {
            level,
            text,
            position: idx + 1,
            id: dom::attr_or_empty(&heading, "id"),
            class: clean_class_list(&dom::attr_or_empty(&heading, "class")),
        });
    }

    harvest
}
