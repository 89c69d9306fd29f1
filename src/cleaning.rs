//! Field-level cleaning rules.
//!
//! Every function here is total: bad input falls back to an empty string or
//! to the input itself, never to an error. None of them touch the document.

use unicode_normalization::UnicodeNormalization;

use crate::patterns::{EMAIL_STRICT, NON_PHONE_CHARS, NUMERIC};
use crate::url_utils;

/// Shortest digit string accepted as a phone number.
const MIN_PHONE_DIGITS: usize = 10;

/// Normalize free text for export.
///
/// Drops control and format characters, applies NFKD compatibility
/// decomposition, collapses whitespace runs to one space and trims.
/// Idempotent.
///
/// # Examples
///
/// ```
/// use html_harvest::cleaning::clean_text;
///
/// assert_eq!(clean_text("  Caf\u{00E9}\u{200B}\n\n menu "), "Cafe\u{301} menu");
/// assert_eq!(clean_text(""), "");
/// ```
#[must_use]
pub fn clean_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let kept: String = text.chars().filter(|&c| !is_removable_char(c)).collect();
    let normalized: String = kept.nfkd().collect();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Control (Cc), format (Cf) and private-use (Co) characters, except the
/// whitespace controls that the collapse step handles.
fn is_removable_char(c: char) -> bool {
    if matches!(c, '\n' | '\r' | '\t') {
        return false;
    }
    c.is_control()
        || matches!(c,
            '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0001}'
            | '\u{E0020}'..='\u{E007F}'
            | '\u{F0000}'..='\u{FFFFD}'
            | '\u{100000}'..='\u{10FFFD}')
}

/// Resolve an attribute URL against the page's base origin.
///
/// Absolute `http(s)://` URLs pass through, scheme-relative `//host/...`
/// references get an `https:` prefix, anything else is joined onto
/// `base_origin`.
///
/// # Examples
///
/// ```
/// use html_harvest::cleaning::clean_url;
///
/// assert_eq!(clean_url("/a/b", "https://x.com"), "https://x.com/a/b");
/// assert_eq!(clean_url("//cdn.x.com/i.png", "https://x.com"), "https://cdn.x.com/i.png");
/// assert_eq!(clean_url("https://y.com/p", "https://x.com"), "https://y.com/p");
/// ```
#[must_use]
pub fn clean_url(href: &str, base_origin: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }

    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if href.starts_with("//") {
        return format!("https:{href}");
    }

    url_utils::resolve_reference(href, base_origin)
}

/// First signed decimal number in the string, or empty.
#[must_use]
pub fn clean_numeric(value: &str) -> String {
    NUMERIC
        .find(value)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Reduce a phone number to digits (and `+`).
///
/// Inputs that leave fewer than ten characters are probably not phone
/// numbers and come back unchanged.
#[must_use]
pub fn standardize_phone(phone: &str) -> String {
    let digits = NON_PHONE_CHARS.replace_all(phone, "");
    if digits.len() >= MIN_PHONE_DIGITS {
        digits.into_owned()
    } else {
        phone.to_string()
    }
}

/// `local@domain.tld` with a TLD of at least two letters.
#[must_use]
pub fn validate_email(email: &str) -> bool {
    EMAIL_STRICT.is_match(email)
}

/// Space-joined token list for `class` / `rel` style attributes.
#[must_use]
pub fn clean_class_list(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Human label from a field name: `first_name` -> `First Name`.
///
/// Separators become spaces; each alphabetic run starts upper-case and
/// continues lower-case.
#[must_use]
pub fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;
    for c in name.chars() {
        let c = if c == '_' || c == '-' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
