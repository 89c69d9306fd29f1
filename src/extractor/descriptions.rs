//! Meta description and paragraph extraction.

use crate::category::Category;
use crate::cleaning::clean_text;
use crate::dom::{self, Selection};
use crate::options::Options;
use crate::page::Page;
use crate::records::{DescriptionKind, DescriptionRecord};

use super::{check_depth, Harvest};

/// Cleaned `<meta name="description">` content, empty when absent.
#[must_use]
pub fn meta_description(page: &Page) -> String {
    let meta = page.select(r#"meta[name="description"]"#);
    if meta.exists() {
        clean_text(&dom::attr_or_empty(&meta.first(), "content"))
    } else {
        String::new()
    }
}

/// Meta description (position 0) followed by every non-empty `<p>`.
#[must_use]
pub fn extract_descriptions(page: &Page, opts: &Options) -> Harvest<DescriptionRecord> {
    let mut harvest = Harvest::new(Category::Descriptions);

    let meta = meta_description(page);
    if !meta.is_empty() {
        harvest.push(record(DescriptionKind::MetaDescription, meta, 0));
    }

    for (idx, node) in page.select("p").nodes().iter().enumerate() {
        let paragraph = Selection::from(*node);
        if let Err(e) = check_depth(&paragraph, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        let text = clean_text(&dom::text_content(&paragraph));
        if !text.is_empty() {
            harvest.push(record(DescriptionKind::Paragraph, text, idx + 1));
        }
    }

    harvest
}

fn record(kind: DescriptionKind, text: String, position: usize) -> DescriptionRecord {
    DescriptionRecord {
        kind,
        length: text.chars().count(),
        text,
        position,
    }
}
