//! Extraction orchestration.
//!
//! Parses the page, settles which categories to run, runs each extractor and
//! gathers their records and failures into one [`ExtractResult`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::analysis::{self, ContentAnalysis};
use crate::category::CategorySet;
use crate::error::Result;
use crate::extractor;
use crate::intent::{IntentClassifier, StopWordPreprocessor};
use crate::metadata::PageMetadata;
use crate::options::Options;
use crate::page::Page;
use crate::result::ExtractResult;

/// Parse `html` and extract the selected categories.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let page = Page::parse(html, options.url.as_deref())?;
    Ok(extract_page(&page, options))
}

/// Parse `html` and pre-scan it.
pub(crate) fn analyze_content(html: &str, options: &Options) -> Result<ContentAnalysis> {
    let page = Page::parse(html, options.url.as_deref())?;
    Ok(analysis::analyze_page(&page, options))
}

/// Categories a run will extract.
///
/// A query, when present, replaces the explicit category set. An empty
/// explicit set means every category.
#[must_use]
pub fn resolve_categories(options: &Options) -> CategorySet {
    if let Some(query) = options.query.as_deref().filter(|q| !q.trim().is_empty()) {
        return IntentClassifier::with_preprocessor(StopWordPreprocessor)
            .threshold(options.intent_threshold)
            .classify(query);
    }
    if options.categories.is_empty() {
        CategorySet::all()
    } else {
        options.categories.clone()
    }
}

/// Extract the selected categories from an already parsed page.
#[must_use]
pub fn extract_page(page: &Page, options: &Options) -> ExtractResult {
    let categories = resolve_categories(options);
    debug!(%categories, url = ?page.url().map(url::Url::as_str), "extracting");

    let mut data = BTreeMap::new();
    let mut failures = Vec::new();
    for category in categories.iter() {
        let (records, category_failures) = extractor::run(category, page, options);
        debug!(%category, items = records.item_count(), failures = category_failures.len(), "category done");
        data.insert(category, records);
        failures.extend(category_failures);
    }

    ExtractResult {
        metadata: PageMetadata::from_page(page),
        categories,
        data,
        failures,
    }
}
