//! Compiled regex patterns and CSS selectors used by the extractors.
//!
//! All patterns are compiled once on first use with `LazyLock`.
//! Named patterns are matched case-insensitively, as the classifier's
//! `extract_pattern` contract requires.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Named Structured-Data Patterns
// =============================================================================

/// Email addresses in free text.
pub static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}\b").expect("EMAIL regex")
});

/// North-American style phone numbers with optional country code.
pub static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:\+?1[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}\b").expect("PHONE regex")
});

/// Dollar-prefixed amounts or amounts followed by a currency word.
pub static PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$\s*\d+(?:,\d{3})*(?:\.\d{2})?|\b\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:USD|EUR|GBP|dollars?)\b",
    )
    .expect("PRICE regex")
});

/// Numeric dates and "Mon DD, YYYY" dates.
pub static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:\d{1,2}[-/]\d{1,2}[-/]\d{2,4}|\d{4}[-/]\d{1,2}[-/]\d{1,2}|(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4})\b",
    )
    .expect("DATE regex")
});

/// Absolute http(s) URLs embedded in text.
pub static URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)https?://(?:www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b(?:[-a-zA-Z0-9()@:%_\+.~#?&/=]*)",
    )
    .expect("URL regex")
});

/// `@handles` and profile paths on the big social networks.
pub static SOCIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:@[A-Za-z0-9_]+|(?:facebook|twitter|instagram|linkedin)\.com/[A-Za-z0-9_.-]+)")
        .expect("SOCIAL regex")
});

/// `$` prices only, used by the content pre-scan.
pub static DOLLAR_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\s*\d+(?:,\d{3})*(?:\.\d{2})?").expect("DOLLAR_PRICE regex")
});

// =============================================================================
// Field Validation Patterns
// =============================================================================

/// Whole-string email validation (`local@domain.tld`, TLD of 2+ letters).
pub static EMAIL_STRICT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("EMAIL_STRICT regex")
});

/// First signed decimal number in a string.
pub static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?\d+(?:\.\d+)?").expect("NUMERIC regex")
});

/// Everything a standardized phone number drops.
pub static NON_PHONE_CHARS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\d+]").expect("NON_PHONE_CHARS regex")
});

// =============================================================================
// Element Classification Patterns
// =============================================================================

/// Class names of elements that hold a price.
pub static PRICE_CLASS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)price|cost|amount").expect("PRICE_CLASS regex")
});

/// Substrings of iframe sources that embed a video player.
pub const VIDEO_PLATFORMS: &[&str] = &["youtube", "vimeo", "dailymotion", "video"];

// =============================================================================
// CSS Selectors
// =============================================================================

/// Heading elements, matched in document order.
pub const HEADING_SELECTOR: &str = "h1, h2, h3, h4, h5, h6";

/// Elements scanned for class-tagged prices.
pub const PRICE_ELEMENT_SELECTOR: &str = "span[class], div[class], p[class], strong[class], b[class]";

/// Form controls, matched in document order within a form.
pub const FORM_CONTROL_SELECTOR: &str = "input, textarea, select, button";
