//! Partial-result accumulation.
//!
//! Extractors keep going when a single element fails. `Harvest` collects the
//! records that succeeded next to an explicit log of the ones that did not,
//! so failures stay observable without aborting the category.

use serde::Serialize;
use tracing::warn;

use crate::category::Category;
use crate::error::Error;

/// An element or a whole category that could not be extracted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionFailure {
    pub category: Category,
    /// 0-based index of the element among the category's candidates;
    /// `None` when the whole category (or a page-wide pass) failed.
    pub element_index: Option<usize>,
    pub cause: String,
}

impl ExtractionFailure {
    #[must_use]
    pub fn element(category: Category, index: usize, cause: &Error) -> Self {
        Self {
            category,
            element_index: Some(index),
            cause: cause.to_string(),
        }
    }

    #[must_use]
    pub fn category(category: Category, cause: &Error) -> Self {
        Self {
            category,
            element_index: None,
            cause: cause.to_string(),
        }
    }
}

/// Records of one category plus the failures met while collecting them.
#[derive(Debug, Clone)]
pub struct Harvest<T> {
    category: Category,
    records: Vec<T>,
    failures: Vec<ExtractionFailure>,
}

impl<T> Harvest<T> {
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            records: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn push(&mut self, record: T) {
        self.records.push(record);
    }

    /// Log an element that was skipped.
    pub fn skip(&mut self, index: usize, cause: &Error) {
        warn!(category = %self.category, index, %cause, "skipped element");
        self.failures.push(ExtractionFailure::element(self.category, index, cause));
    }

    /// Log a page-wide pass of this category that did not run.
    pub fn fail_pass(&mut self, cause: &Error) {
        warn!(category = %self.category, %cause, "skipped page-wide pass");
        self.failures.push(ExtractionFailure::category(self.category, cause));
    }

    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    #[must_use]
    pub fn failures(&self) -> &[ExtractionFailure] {
        &self.failures
    }

    /// Records that satisfy `pred`, used for dedup checks within a pass.
    pub fn any(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.records.iter().any(pred)
    }

    /// Split into records and failures.
    #[must_use]
    pub fn into_parts(self) -> (Vec<T>, Vec<ExtractionFailure>) {
        (self.records, self.failures)
    }

    /// Map the record list, keeping the failure log.
    #[must_use]
    pub fn map_records<U>(self, f: impl FnOnce(Vec<T>) -> U) -> (U, Vec<ExtractionFailure>) {
        (f(self.records), self.failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_kept_beside_records() {
        let mut harvest = Harvest::new(Category::Images);
        harvest.push("first");
        harvest.skip(1, &Error::TooDeep { depth: 120, max: 100 });
        harvest.push("third");

        let (records, failures) = harvest.into_parts();
        assert_eq!(records, vec!["first", "third"]);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].category, Category::Images);
        assert_eq!(failures[0].element_index, Some(1));
        assert!(failures[0].cause.contains("120"));
    }

    #[test]
    fn page_wide_failures_have_no_index() {
        let mut harvest: Harvest<()> = Harvest::new(Category::Prices);
        harvest.fail_pass(&Error::ScanLimit { len: 10, max: 5 });
        assert_eq!(harvest.failures()[0].element_index, None);
    }
}
