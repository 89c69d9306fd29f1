//! Configuration options for extraction.
//!
//! The `Options` struct selects what to extract and bounds how much work a
//! single hostile document can cause.

use crate::category::CategorySet;
use crate::intent::DEFAULT_INTENT_THRESHOLD;

/// Configuration options for extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use html_harvest::{Category, CategorySet, Options};
///
/// // Everything, relative links unresolved
/// let options = Options::default();
///
/// // Only tables and forms of a known page
/// let options = Options {
///     url: Some("https://example.com/catalog".to_string()),
///     categories: [Category::Tables, Category::Forms].into_iter().collect(),
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL the document was fetched from.
    ///
    /// Its origin resolves relative references and decides which links are
    /// external. Must be an absolute http(s) URL when set.
    ///
    /// Default: `None`
    pub url: Option<String>,

    /// Categories to extract.
    ///
    /// Ignored when `query` is set.
    ///
    /// Default: every category
    pub categories: CategorySet,

    /// Free-text request classified into categories.
    ///
    /// Default: `None`
    pub query: Option<String>,

    /// Fraction of the best intent score another intent needs to be selected.
    ///
    /// Default: `0.7`
    pub intent_threshold: f64,

    /// Maximum ancestor count of an element that is still extracted.
    ///
    /// Deeper elements are skipped and logged as failures.
    ///
    /// Default: `100`
    pub max_tree_depth: usize,

    /// Maximum page text length (characters) scanned with the contact and
    /// price patterns.
    ///
    /// Default: `2_000_000`
    pub max_scan_len: usize,

    /// Characters of element text kept as price context.
    ///
    /// Default: `150`
    pub price_context_len: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            url: None,
            categories: CategorySet::all(),
            query: None,
            intent_threshold: DEFAULT_INTENT_THRESHOLD,
            max_tree_depth: 100,
            max_scan_len: 2_000_000,
            price_context_len: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.url.is_none());
        assert!(opts.categories.is_all());
        assert!(opts.query.is_none());
        assert!((opts.intent_threshold - 0.7).abs() < f64::EPSILON);
        assert_eq!(opts.max_tree_depth, 100);
        assert_eq!(opts.max_scan_len, 2_000_000);
        assert_eq!(opts.price_context_len, 150);
    }

    #[test]
    fn test_custom_fields() {
        let opts = Options {
            categories: [Category::Links].into_iter().collect(),
            max_tree_depth: 20,
            ..Options::default()
        };

        assert!(opts.categories.contains(Category::Links));
        assert!(!opts.categories.contains(Category::Titles));
        assert_eq!(opts.max_tree_depth, 20);
    }
}
