use html_harvest::cleaning::{
    clean_class_list, clean_numeric, clean_text, clean_url, standardize_phone, title_case, validate_email,
};

#[test]
fn clean_text_collapses_and_strips_controls() {
    assert_eq!(clean_text("  Hello\u{0007}   \n\t World  "), "Hello World");
    assert_eq!(clean_text("\u{FEFF}zero\u{200D}width"), "zerowidth");
    assert_eq!(clean_text("   "), "");
}

#[test]
fn clean_text_applies_compatibility_decomposition() {
    // fullwidth letters and the fi ligature fold to ASCII
    assert_eq!(clean_text("\u{FF21}\u{FF22}\u{FB01}"), "ABfi");
    assert_eq!(clean_text("\u{00A0}non\u{00A0}breaking\u{00A0}"), "non breaking");
}

#[test]
fn clean_text_is_idempotent() {
    let samples = [
        "  Caf\u{00E9}  menu ",
        "\u{2460} first\r\nsecond",
        "tab\tand\u{0085}next",
        "\u{FB01}ne \u{00BD} price",
        "",
    ];
    for sample in samples {
        let once = clean_text(sample);
        assert_eq!(clean_text(&once), once, "not idempotent for {sample:?}");
    }
}

#[test]
fn clean_url_resolution() {
    assert_eq!(clean_url("/a/b", "https://x.com"), "https://x.com/a/b");
    assert_eq!(clean_url("//cdn.x.com/i.png", "https://x.com"), "https://cdn.x.com/i.png");
    assert_eq!(clean_url("https://y.com/p", "https://x.com"), "https://y.com/p");
    assert_eq!(clean_url("page?x=1", "https://x.com"), "https://x.com/page?x=1");
    assert_eq!(clean_url("", "https://x.com"), "");
    assert_eq!(clean_url("/a", ""), "/a");
}

#[test]
fn numeric_and_phone_cleaning() {
    assert_eq!(clean_numeric("Price: -12.50 USD"), "-12.50");
    assert_eq!(clean_numeric("n/a"), "");
    assert_eq!(standardize_phone("(555) 123-4567"), "5551234567");
    assert_eq!(standardize_phone("+1 (555) 123-4567"), "+15551234567");
    assert_eq!(standardize_phone("ext. 12"), "ext. 12");
}

#[test]
fn email_validation() {
    assert!(validate_email("a.b+c@example.co.uk"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("not an email"));
    assert!(!validate_email("x@example.c"));
}

#[test]
fn attribute_helpers() {
    assert_eq!(clean_class_list("  btn   btn-primary\n"), "btn btn-primary");
    assert_eq!(title_case("billing_address-line2"), "Billing Address Line2");
    assert_eq!(title_case(""), "");
}
