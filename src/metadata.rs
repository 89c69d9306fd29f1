//! Page-level metadata.
//!
//! The handful of facts that describe the page as a whole rather than a
//! category: where it came from, its `<title>`, its meta description and
//! when it was extracted.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use crate::cleaning::clean_text;
use crate::extractor::descriptions::meta_description;
use crate::page::Page;

/// Rendering of [`PageMetadata::timestamp`].
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Title reported for pages without a usable `<title>`.
pub const NO_TITLE: &str = "No title";

/// Metadata about one extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Page URL, empty when the caller supplied none.
    pub url: String,

    /// Cleaned `<title>` text, or [`NO_TITLE`].
    pub title: String,

    /// Cleaned meta description, or empty.
    pub description: String,

    /// Extraction time (UTC).
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl PageMetadata {
    /// Read metadata from a page, stamped with the current time.
    #[must_use]
    pub fn from_page(page: &Page) -> Self {
        Self::from_page_at(page, Utc::now())
    }

    /// Read metadata from a page with an explicit timestamp.
    #[must_use]
    pub fn from_page_at(page: &Page, timestamp: DateTime<Utc>) -> Self {
        Self {
            url: page.url().map(ToString::to_string).unwrap_or_default(),
            title: page_title(page),
            description: meta_description(page),
            timestamp,
        }
    }

    /// Timestamp as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub fn scraped_at(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn page_title(page: &Page) -> String {
    let title = page.select("title");
    if !title.exists() {
        return NO_TITLE.to_string();
    }
    let text = clean_text(&title.first().text());
    if text.is_empty() {
        NO_TITLE.to_string()
    } else {
        text
    }
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&ts.format(TIMESTAMP_FORMAT))
}
