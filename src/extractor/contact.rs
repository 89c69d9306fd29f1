//! Email and phone extraction from page text.

use crate::category::Category;
use crate::cleaning::{standardize_phone, validate_email};
use crate::intent::{extract_pattern, PatternKind};
use crate::options::Options;
use crate::page::Page;
use crate::records::ContactInfo;

use super::{scan_text, ExtractionFailure, Harvest};

/// Unique email addresses and phone numbers, in order of first appearance.
///
/// Emails must pass [`validate_email`]; phones are reduced with
/// [`standardize_phone`] before deduplication.
#[must_use]
pub fn extract_contact(page: &Page, opts: &Options) -> (ContactInfo, Vec<ExtractionFailure>) {
    let mut harvest: Harvest<()> = Harvest::new(Category::Contact);

    let text = match scan_text(page, opts) {
        Ok(text) => text,
        Err(e) => {
            harvest.fail_pass(&e);
            return (ContactInfo::default(), harvest.into_parts().1);
        }
    };

    let info = contact_info(&text);
    (info, harvest.into_parts().1)
}

/// Contact data found in a block of text.
#[must_use]
pub fn contact_info(text: &str) -> ContactInfo {
    let emails = unique(extract_pattern(text, PatternKind::Email).into_iter().filter(|e| validate_email(e)));
    let phones = unique(
        extract_pattern(text, PatternKind::Phone)
            .iter()
            .map(|p| standardize_phone(p)),
    );

    ContactInfo {
        total_contacts: emails.len() + phones.len(),
        emails,
        phones,
    }
}

fn unique(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contacts_are_deduplicated_in_order() {
        let info = contact_info(
            "Write sales@example.com or help@example.org, again sales@example.com. \
             Call (555) 123-4567 or 555.123.4567 or +1 555 987 6543.",
        );
        assert_eq!(info.emails, ["sales@example.com", "help@example.org"]);
        assert_eq!(info.phones.first().map(String::as_str), Some("5551234567"));
        assert_eq!(info.phones.iter().filter(|p| *p == "5551234567").count(), 1);
        assert_eq!(info.total_contacts, info.emails.len() + info.phones.len());
    }

    #[test]
    fn scan_limit_is_a_pass_failure() {
        let page = Page::parse("<p>sales@example.com</p>", None).unwrap();
        let opts = Options {
            max_scan_len: 3,
            ..Options::default()
        };
        let (info, failures) = extract_contact(&page, &opts);
        assert_eq!(info, ContactInfo::default());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].element_index, None);
        assert!(failures[0].cause.contains("scan limit"));
    }
}
