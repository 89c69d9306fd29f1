//! # html-harvest
//!
//! Structured record extraction from HTML pages.
//!
//! Given a parsed page, this library pulls typed records out of it (headings,
//! paragraphs, images, links, tables, contact details, prices, videos, forms
//! and meta tags), cleans every field, and flattens the result into named
//! rectangular tables ready for a spreadsheet or CSV writer.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_harvest::{extract_with_options, Category, Options};
//!
//! let html = r#"<html><head><title>Plans</title></head><body>
//! <h1>Pricing</h1>
//! <table><tr><th>Plan</th><th>Price</th></tr><tr><td>Basic</td><td>$5</td></tr></table>
//! </body></html>"#;
//!
//! let options = Options {
//!     url: Some("https://example.com/pricing".to_string()),
//!     ..Options::default()
//! };
//! let result = extract_with_options(html, &options)?;
//! assert_eq!(result.metadata.title, "Plans");
//! assert!(result.get(Category::Tables).is_some());
//!
//! let tables = result.tables();
//! assert_eq!(tables.get("6_Table_1").map(|t| t.len()), Some(1));
//! # Ok::<(), html_harvest::Error>(())
//! ```
//!
//! ## Choosing what to extract
//!
//! - **Explicit**: set `Options::categories`.
//! - **Free text**: set `Options::query`; the [`IntentClassifier`] maps the
//!   request onto categories, or onto all of them when nothing matches.
//!
//! Per-element problems never abort a run. They are listed in
//! [`ExtractResult::failures`] and the remaining records are returned.

mod error;
mod extract;
mod options;
mod patterns;
mod result;

/// Read-only DOM helpers over `dom_query`.
pub mod dom;

/// Parsed page plus its base origin.
pub mod page;

/// Field cleaning (text, URLs, numbers, phones, emails).
pub mod cleaning;

/// URL validation and resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Category enumeration and category sets.
pub mod category;

/// Intent classification of free-text requests and named patterns.
pub mod intent;

/// Typed record schemas.
pub mod records;

/// Per-category extractors and failure accounting.
pub mod extractor;

/// Page-level metadata.
pub mod metadata;

/// Cheap pre-scan of available content.
pub mod analysis;

/// Tabular normalization of extracted records.
pub mod normalize;

// Public API - re-exports
pub use analysis::{ContentAnalysis, ContentSummary};
pub use category::{Category, CategorySet};
pub use error::{Error, Result};
pub use extract::{extract_page, resolve_categories};
pub use extractor::{ExtractionFailure, Harvest};
pub use intent::{extract_pattern, IntentClassifier, IntentKind, PatternKind, QueryPreprocessor};
pub use metadata::PageMetadata;
pub use normalize::{NamedTable, TableSet};
pub use options::Options;
pub use page::Page;
pub use records::CategoryData;
pub use result::ExtractResult;

/// Extracts every category from an HTML document using default options.
///
/// # Example
///
/// ```rust
/// use html_harvest::extract;
///
/// let result = extract("<html><body><h1>Hello</h1></body></html>")?;
/// assert_eq!(result.total_items(), 1);
/// # Ok::<(), html_harvest::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts records from an HTML document with custom options.
///
/// Fails only on caller input errors, such as an `Options::url` that is not
/// an absolute http(s) URL.
///
/// # Example
///
/// ```rust
/// use html_harvest::{extract_with_options, Category, Options};
///
/// let html = r#"<form action="/signup"><input type="email" name="email" required></form>"#;
/// let options = Options {
///     url: Some("https://example.com/".to_string()),
///     query: Some("signup form".to_string()),
///     ..Options::default()
/// };
/// let result = extract_with_options(html, &options)?;
/// assert!(result.categories.contains(Category::Forms));
/// # Ok::<(), html_harvest::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts records from HTML bytes with automatic encoding detection.
///
/// The encoding comes from a byte-order mark, then from a `<meta charset>`
/// or `http-equiv` declaration, and defaults to UTF-8. Invalid sequences
/// become U+FFFD instead of failing.
///
/// # Example
///
/// ```rust
/// use html_harvest::extract_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body><h1>Caf\xE9</h1></body></html>";
/// let result = extract_bytes(html)?;
/// assert!(result.to_json()?.contains("Cafe"));
/// # Ok::<(), html_harvest::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8]) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract(&html_str)
}

/// Extracts records from HTML bytes with custom options and automatic
/// encoding detection.
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes_with_options(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}

/// Pre-scans a document and reports candidate counts per category.
///
/// # Example
///
/// ```rust
/// use html_harvest::{analyze, Category, Options};
///
/// let analysis = analyze("<p>One</p><p>Two</p>", &Options::default())?;
/// assert_eq!(analysis.get(Category::Descriptions).map(|s| s.count), Some(2));
/// # Ok::<(), html_harvest::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn analyze(html: &str, options: &Options) -> Result<ContentAnalysis> {
    extract::analyze_content(html, options)
}
