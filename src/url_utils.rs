//! URL utilities: page URL validation, base origin derivation and
//! relative reference resolution.

use url::Url;

use crate::error::{Error, Result};

/// Validate the URL a page was fetched from.
///
/// The URL must carry an `http` or `https` scheme and a host.
pub fn validate_page_url(url_str: &str) -> Result<Url> {
    let trimmed = url_str.trim();
    let parsed = Url::parse(trimmed).map_err(|e| Error::InvalidUrl(format!("{trimmed}: {e}")))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidUrl(format!(
            "{trimmed}: URL must start with http:// or https://"
        )));
    }
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(Error::InvalidUrl(format!("{trimmed}: missing host")));
    }

    Ok(parsed)
}

/// Get the base origin (`scheme://host[:port]`) of a URL.
#[must_use]
pub fn base_origin(url: &Url) -> String {
    let Some(host) = url.host_str() else {
        return String::new();
    };
    match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    }
}

/// Resolve a reference against a base with standard relative-URL rules.
///
/// Returns the reference unchanged when the base does not parse or the
/// join fails.
#[must_use]
pub fn resolve_reference(reference: &str, base: &str) -> String {
    let Ok(base_url) = Url::parse(base) else {
        return reference.to_string();
    };

    match base_url.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => reference.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_page_url_accepts_http_and_https() {
        assert!(validate_page_url("https://example.com/shop?page=2").is_ok());
        assert!(validate_page_url("http://example.com").is_ok());
    }

    #[test]
    fn test_validate_page_url_rejects_other_inputs() {
        assert!(matches!(validate_page_url("example.com"), Err(Error::InvalidUrl(_))));
        assert!(matches!(validate_page_url("ftp://example.com/file"), Err(Error::InvalidUrl(_))));
        assert!(matches!(validate_page_url("mailto:a@b.com"), Err(Error::InvalidUrl(_))));
        assert!(matches!(validate_page_url(""), Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_base_origin_keeps_port_drops_path() {
        let shop = Url::parse("https://shop.example.com/a/b?c=d").unwrap();
        assert_eq!(base_origin(&shop), "https://shop.example.com");
        let local = Url::parse("http://localhost:8080/index.html").unwrap();
        assert_eq!(base_origin(&local), "http://localhost:8080");
    }

    #[test]
    fn test_resolve_reference() {
        assert_eq!(resolve_reference("/a/b", "https://x.com"), "https://x.com/a/b");
        assert_eq!(resolve_reference("img/p.png", "https://x.com"), "https://x.com/img/p.png");
        assert_eq!(resolve_reference("mailto:hi@x.com", "https://x.com"), "mailto:hi@x.com");
    }

    #[test]
    fn test_resolve_reference_without_base() {
        assert_eq!(resolve_reference("/a/b", ""), "/a/b");
    }
}
