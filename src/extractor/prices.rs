//! Price extraction.
//!
//! Two passes: elements whose class mentions price, cost or amount give
//! prices with their surrounding text, then a scan of the whole page text
//! adds prices the first pass did not see.

use crate::category::Category;
use crate::cleaning::{clean_numeric, clean_text};
use crate::dom::{self, Selection};
use crate::intent::{extract_pattern, PatternKind};
use crate::options::Options;
use crate::page::Page;
use crate::patterns::{PRICE_CLASS, PRICE_ELEMENT_SELECTOR};
use crate::records::PriceRecord;

use super::{check_depth, scan_text, Harvest};

/// Context of prices found by the page-wide scan.
pub const GENERAL_CONTEXT: &str = "General page content";

/// Numeric value of a written price: `"$1,299.00"` -> `"1299.00"`.
#[must_use]
pub fn price_amount(price: &str) -> String {
    clean_numeric(&price.replace(',', ""))
}

#[must_use]
pub fn extract_prices(page: &Page, opts: &Options) -> Harvest<PriceRecord> {
    let mut harvest = Harvest::new(Category::Prices);

    let candidates = page.select(PRICE_ELEMENT_SELECTOR);
    for (idx, node) in candidates.nodes().iter().enumerate() {
        let elem = Selection::from(*node);
        if !PRICE_CLASS.is_match(&dom::attr_or_empty(&elem, "class")) {
            continue;
        }
        if let Err(e) = check_depth(&elem, opts) {
            harvest.skip(idx, &e);
            continue;
        }

        let text = clean_text(&dom::text_content(&elem));
        let context: String = text.chars().take(opts.price_context_len).collect();
        for price in extract_pattern(&text, PatternKind::Price) {
            harvest.push(PriceRecord {
                amount: price_amount(&price),
                price,
                context: context.clone(),
            });
        }
    }

    match scan_text(page, opts) {
        Ok(text) => {
            for price in extract_pattern(&text, PatternKind::Price) {
                if harvest.any(|p| p.price == price) {
                    continue;
                }
                harvest.push(PriceRecord {
                    amount: price_amount(&price),
                    price,
                    context: GENERAL_CONTEXT.to_string(),
                });
            }
        }
        Err(e) => harvest.fail_pass(&e),
    }

    harvest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classed_elements_carry_context() {
        let html = r#"<div class="product-price">Now only $1,299.00 while stock lasts</div>
            <p>Shipping costs $15 everywhere. Was $1,299.00.</p>"#;
        let page = Page::parse(html, None).unwrap();
        let (prices, failures) = extract_prices(&page, &Options::default()).into_parts();

        assert!(failures.is_empty());
        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].price, "$1,299.00");
        assert_eq!(prices[0].amount, "1299.00");
        assert_eq!(prices[0].context, "Now only $1,299.00 while stock lasts");
        assert_eq!(prices[1].price, "$15");
        assert_eq!(prices[1].context, GENERAL_CONTEXT);
    }

    #[test]
    fn context_is_truncated() {
        let page = Page::parse(r#"<span class="Cost">$9.99 and then some more words</span>"#, None).unwrap();
        let opts = Options {
            price_context_len: 5,
            ..Options::default()
        };
        let (prices, _) = extract_prices(&page, &opts).into_parts();
        assert_eq!(prices[0].context, "$9.99");
    }

    #[test]
    fn currency_words_are_prices() {
        let page = Page::parse("<p>Fee: 250 USD per seat</p>", None).unwrap();
        let (prices, _) = extract_prices(&page, &Options::default()).into_parts();
        assert_eq!(prices[0].price, "250 USD");
        assert_eq!(prices[0].amount, "250");
    }

    #[test]
    fn scan_limit_keeps_element_prices() {
        let page = Page::parse(r#"<b class="amount">$3</b><p>and lots more text here $4</p>"#, None).unwrap();
        let opts = Options {
            max_scan_len: 4,
            ..Options::default()
        };
        let (prices, failures) = extract_prices(&page, &opts).into_parts();
        assert_eq!(prices.len(), 1);
        assert_eq!(failures.len(), 1);
    }
}
