//! Category extractors.
//!
//! One function per category, each reading a [`Page`] and returning a
//! [`Harvest`] of typed records plus the elements it had to skip:
//! - `headings` - `h1`..`h6` titles
//! - `descriptions` - meta description and paragraphs
//! - `media` - images and embedded videos
//! - `links` - anchors with an `href`
//! - `tables` - `<table>` header and data rows
//! - `contact` - email addresses and phone numbers
//! - `prices` - price-classed elements plus a page-wide scan
//! - `forms` - forms with their controls and select options
//! - `meta` - `<meta>` tags
//! - `state` - the `Harvest` accumulator and failure records

pub mod contact;
pub mod descriptions;
pub mod forms;
pub mod headings;
pub mod links;
pub mod media;
pub mod meta;
pub mod prices;
pub mod state;
pub mod tables;

pub use state::{ExtractionFailure, Harvest};

use crate::category::Category;
use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::page::Page;
use crate::records::CategoryData;

/// Run the extractor of one category.
#[must_use]
pub fn run(category: Category, page: &Page, opts: &Options) -> (CategoryData, Vec<ExtractionFailure>) {
    match category {
        Category::Titles => headings::extract_titles(page, opts).map_records(CategoryData::Titles),
        Category::Descriptions => {
            descriptions::extract_descriptions(page, opts).map_records(CategoryData::Descriptions)
        }
        Category::Images => media::extract_images(page, opts).map_records(CategoryData::Images),
        Category::Links => links::extract_links(page, opts).map_records(CategoryData::Links),
        Category::Tables => tables::extract_tables(page, opts).map_records(CategoryData::Tables),
        Category::Contact => {
            let (info, failures) = contact::extract_contact(page, opts);
            (CategoryData::Contact(info), failures)
        }
        Category::Prices => prices::extract_prices(page, opts).map_records(CategoryData::Prices),
        Category::Videos => media::extract_videos(page, opts).map_records(CategoryData::Videos),
        Category::Forms => forms::extract_forms(page, opts).map_records(CategoryData::Forms),
        Category::Meta => meta::extract_meta(page, opts).map_records(CategoryData::Meta),
    }
}

/// Reject elements nested deeper than `max_tree_depth`.
pub(crate) fn check_depth(sel: &Selection, opts: &Options) -> Result<()> {
    let depth = dom::depth(sel);
    if depth > opts.max_tree_depth {
        return Err(Error::TooDeep {
            depth,
            max: opts.max_tree_depth,
        });
    }
    Ok(())
}

/// Page text for the pattern passes, bounded by `max_scan_len`.
pub(crate) fn scan_text(page: &Page, opts: &Options) -> Result<String> {
    let text = page.text();
    let len = text.chars().count();
    if len > opts.max_scan_len {
        return Err(Error::ScanLimit {
            len,
            max: opts.max_scan_len,
        });
    }
    Ok(text)
}
