//! Content pre-scan.
//!
//! Counts candidates per category with cheap element and pattern queries so a
//! caller can choose categories before running the full extractors. Counts
//! are raw element counts and can exceed what extraction later returns.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{debug, warn};

use crate::category::Category;
use crate::cleaning::clean_text;
use crate::dom;
use crate::extractor::scan_text;
use crate::intent::{extract_pattern, PatternKind};
use crate::metadata::PageMetadata;
use crate::options::Options;
use crate::page::Page;
use crate::patterns::{DOLLAR_PRICE, HEADING_SELECTOR};

const TEXT_PREVIEW_CHARS: usize = 100;
const SHORT_PREVIEW_CHARS: usize = 50;

/// Candidate count and a short sample for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentSummary {
    pub count: usize,
    pub preview: String,
}

/// What a page offers, category by category.
///
/// Categories without candidates are absent from `categories`.
#[derive(Debug, Clone, Serialize)]
pub struct ContentAnalysis {
    pub metadata: PageMetadata,
    pub categories: BTreeMap<Category, ContentSummary>,
}

impl ContentAnalysis {
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&ContentSummary> {
        self.categories.get(&category)
    }

    /// Categories with at least one candidate, in display order.
    #[must_use]
    pub fn available(&self) -> Vec<Category> {
        self.categories.keys().copied().collect()
    }
}

/// Pre-scan a parsed page.
#[must_use]
pub fn analyze_page(page: &Page, opts: &Options) -> ContentAnalysis {
    let mut categories = BTreeMap::new();
    let mut add = |category: Category, count: usize, preview: String| {
        if count > 0 {
            categories.insert(category, ContentSummary { count, preview });
        }
    };

    let headings = page.select(HEADING_SELECTOR);
    add(Category::Titles, headings.length(), first_text(&headings, TEXT_PREVIEW_CHARS));

    let paragraphs = page.select("p");
    add(
        Category::Descriptions,
        paragraphs.length(),
        first_text(&paragraphs, TEXT_PREVIEW_CHARS),
    );

    let images = page.select("img");
    let src = dom::get_attribute(&images.first(), "src").unwrap_or_else(|| "No src".to_string());
    add(Category::Images, images.length(), format!("{}...", truncate(&src, SHORT_PREVIEW_CHARS)));

    let links = page.select("a[href]");
    add(Category::Links, links.length(), first_text(&links, SHORT_PREVIEW_CHARS));

    let tables = page.select("table");
    let first_rows = tables.first().select("tr").length();
    add(Category::Tables, tables.length(), format!("Table with {first_rows} rows"));

    match scan_text(page, opts) {
        Ok(text) => {
            let emails = distinct(extract_pattern(&text, PatternKind::Email));
            let phones = distinct(extract_pattern(&text, PatternKind::Phone));
            add(
                Category::Contact,
                emails + phones,
                format!("{emails} emails, {phones} phones"),
            );

            let prices: Vec<&str> = DOLLAR_PRICE.find_iter(&text).map(|m| m.as_str()).collect();
            let preview = prices.first().map(ToString::to_string).unwrap_or_default();
            add(Category::Prices, distinct(prices), preview);
        }
        Err(e) => warn!(%e, "pattern pre-scan skipped"),
    }

    let videos = page.select("video, iframe").length();
    add(Category::Videos, videos, "Video content detected".to_string());

    let forms = page.select("form").length();
    add(Category::Forms, forms, format!("{forms} form(s) detected"));

    let metas = page.select("meta").length();
    add(Category::Meta, metas, format!("{metas} meta tags"));

    debug!(available = categories.len(), "content pre-scan done");
    ContentAnalysis {
        metadata: PageMetadata::from_page(page),
        categories,
    }
}

fn first_text(sel: &dom::Selection, max_chars: usize) -> String {
    if !sel.exists() {
        return String::new();
    }
    truncate(&clean_text(&sel.first().text()), max_chars)
}

fn truncate(s: &str, max_chars: usize) -> String {
    s.chars().take(max_chars).collect()
}

fn distinct<T: Ord>(values: Vec<T>) -> usize {
    values.into_iter().collect::<BTreeSet<_>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(html: &str) -> ContentAnalysis {
        let page = Page::parse(html, None).unwrap();
        analyze_page(&page, &Options::default())
    }

    #[test]
    fn counts_and_previews() {
        let analysis = analyze(
            r#"<h1>Welcome</h1><h2>More</h2><p>First paragraph</p>
               <img src="https://cdn.example.com/a-very-long-image-path/that-keeps-going/img.png">
               <a href="/x">Go there</a>
               <table><tr><td>a</td></tr><tr><td>b</td></tr></table>
               <p>Mail a@b.com or a@b.com, call 555-123-4567. Only $5 or $5 or $7.</p>
               <iframe src="https://maps.example.com"></iframe>
               <form></form><form></form>"#,
        );

        assert_eq!(analysis.get(Category::Titles).unwrap().count, 2);
        assert_eq!(analysis.get(Category::Titles).unwrap().preview, "Welcome");
        assert_eq!(analysis.get(Category::Descriptions).unwrap().count, 2);
        assert!(analysis.get(Category::Images).unwrap().preview.ends_with("..."));
        assert_eq!(analysis.get(Category::Images).unwrap().preview.chars().count(), 53);
        assert_eq!(analysis.get(Category::Links).unwrap().preview, "Go there");
        assert_eq!(analysis.get(Category::Tables).unwrap().preview, "Table with 2 rows");
        assert_eq!(analysis.get(Category::Contact).unwrap().count, 2);
        assert_eq!(analysis.get(Category::Contact).unwrap().preview, "1 emails, 1 phones");
        assert_eq!(analysis.get(Category::Prices).unwrap().count, 2);
        assert_eq!(analysis.get(Category::Prices).unwrap().preview, "$5");
        assert_eq!(analysis.get(Category::Videos).unwrap().count, 1);
        assert_eq!(analysis.get(Category::Forms).unwrap().preview, "2 form(s) detected");
        assert!(analysis.get(Category::Meta).is_none());
    }

    #[test]
    fn empty_page_offers_nothing() {
        let analysis = analyze("<html><body></body></html>");
        assert!(analysis.available().is_empty());
        assert_eq!(analysis.metadata.title, "No title");
    }

    #[test]
    fn image_without_src_says_so() {
        let analysis = analyze(r#"<img data-src="x.png">"#);
        assert_eq!(analysis.get(Category::Images).unwrap().preview, "No src...");
    }
}
