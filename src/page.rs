//! A parsed page plus the origin used to resolve its references.

use url::Url;

use crate::cleaning;
use crate::dom::{self, Document, Selection};
use crate::encoding;
use crate::error::Result;
use crate::url_utils;

/// Parsed document, read-only for the whole extraction run.
pub struct Page {
    document: Document,
    url: Option<Url>,
    base_origin: String,
}

impl Page {
    /// Parse HTML fetched from `url` (if known).
    ///
    /// Fails only when `url` is given and is not an absolute http(s) URL.
    pub fn parse(html: &str, url: Option<&str>) -> Result<Self> {
        let url = url.map(url_utils::validate_page_url).transpose()?;
        let base_origin = url.as_ref().map(url_utils::base_origin).unwrap_or_default();

        Ok(Self {
            document: dom::parse(html),
            url,
            base_origin,
        })
    }

    /// Parse raw bytes, detecting the charset first.
    pub fn parse_bytes(html: &[u8], url: Option<&str>) -> Result<Self> {
        Self::parse(&encoding::transcode_to_utf8(html), url)
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// `scheme://host[:port]` of the page URL, empty when unknown.
    #[must_use]
    pub fn base_origin(&self) -> &str {
        &self.base_origin
    }

    /// All elements matching a CSS selector, in document order.
    #[must_use]
    pub fn select(&self, selector: &str) -> Selection<'_> {
        self.document.select(selector)
    }

    /// Absolute form of an attribute URL.
    #[must_use]
    pub fn resolve(&self, href: &str) -> String {
        cleaning::clean_url(href, &self.base_origin)
    }

    /// Page text used by the pattern scans.
    #[must_use]
    pub fn text(&self) -> String {
        dom::page_text(&self.document)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.url.as_ref().map(Url::as_str))
            .field("base_origin", &self.base_origin)
            .finish_non_exhaustive()
    }
}
