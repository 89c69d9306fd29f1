//! Result types for extraction output.
//!
//! An [`ExtractResult`] holds the typed records of every selected category,
//! the page metadata and the failures met on the way. The tabular view is
//! derived on demand with [`ExtractResult::tables`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::category::{Category, CategorySet};
use crate::error::Result;
use crate::extractor::ExtractionFailure;
use crate::metadata::PageMetadata;
use crate::normalize::{self, TableSet};
use crate::records::CategoryData;

/// Result of extracting records from one HTML document.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResult {
    /// URL, title, description and extraction time.
    pub metadata: PageMetadata,

    /// Categories that were selected, explicitly or from the query.
    pub categories: CategorySet,

    /// Records per selected category, in display order.
    ///
    /// Every selected category is present, even when it found nothing or a
    /// whole pass failed; see `failures` for what was skipped.
    pub data: BTreeMap<Category, CategoryData>,

    /// Elements and passes that could not be extracted.
    ///
    /// Non-fatal: everything else in the result is still valid.
    pub failures: Vec<ExtractionFailure>,
}

impl ExtractResult {
    /// Records of one category.
    #[must_use]
    pub fn get(&self, category: Category) -> Option<&CategoryData> {
        self.data.get(&category)
    }

    /// Item count across all categories.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.data.values().map(CategoryData::item_count).sum()
    }

    /// Whether no category found anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_items() == 0
    }

    /// Failures of one category.
    pub fn failures_for(&self, category: Category) -> impl Iterator<Item = &ExtractionFailure> {
        self.failures.iter().filter(move |f| f.category == category)
    }

    /// Named tables in display order, `1_Metadata` first.
    #[must_use]
    pub fn tables(&self) -> TableSet {
        normalize::normalize(&self.metadata, &self.data)
    }

    /// Pretty-printed JSON of the whole result.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
