//! Error types for html-harvest.
//!
//! Cleaning never fails and most extraction problems are recorded as
//! [`ExtractionFailure`](crate::ExtractionFailure) entries instead of being
//! returned. The variants below cover caller input errors and the per-element
//! or per-category causes that end up in that failure log.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The page URL is not an absolute http(s) URL with a host.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(String),

    /// A category name outside the fixed enumeration.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A pattern name outside the named regex table.
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),

    /// An element sits deeper in the tree than `Options::max_tree_depth`.
    #[error("Element nested {depth} levels deep (limit {max})")]
    TooDeep {
        /// Ancestor count of the element.
        depth: usize,
        /// Configured limit.
        max: usize,
    },

    /// Page text is longer than `Options::max_scan_len`.
    #[error("Page text of {len} chars exceeds scan limit of {max}")]
    ScanLimit {
        /// Character count of the page text.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// JSON encoding of a result failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
