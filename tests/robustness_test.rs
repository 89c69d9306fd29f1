use html_harvest::{extract, extract_with_options, Category, CategoryData, Options};

fn nested(depth: usize, inner: &str) -> String {
    format!("{}{inner}{}", "<div>".repeat(depth), "</div>".repeat(depth))
}

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let result = extract("<h1>Title<p>text<div>more <a href='/x'>link").expect("malformed html is still input");
    assert!(matches!(result.get(Category::Titles), Some(CategoryData::Titles(t)) if !t.is_empty()));
    assert!(matches!(result.get(Category::Links), Some(CategoryData::Links(l)) if l.len() == 1));
}

#[test]
fn extract_does_not_panic_on_broken_tables() {
    let html = "<table><td>orphan cell<tr><th>H</th></td></tr><tr><td>x";
    let result = extract(html).expect("malformed html is still input");
    assert!(result.failures.is_empty());
    for table in result.tables().iter() {
        assert!(table.rows().iter().all(|r| r.len() == table.headers().len()));
    }
}

#[test]
fn extract_handles_empty_input() {
    let result = extract("").expect("empty input is valid");
    assert!(result.is_empty());
    assert_eq!(result.metadata.title, "No title");
    assert_eq!(result.tables().names(), ["1_Metadata"]);
}

#[test]
fn extract_handles_binary_garbage() {
    let html = "\u{0}\u{1}<\u{FFFD}>\u{7F}<<<>>>&&&;;";
    assert!(extract(html).is_ok());
}

#[test]
fn missing_attributes_read_as_empty_strings() {
    let result = extract("<img><a href>x</a><meta><iframe src='https://youtube.com/embed/1'></iframe>")
        .expect("valid input");

    let Some(CategoryData::Images(images)) = result.get(Category::Images) else {
        panic!("images missing");
    };
    assert_eq!(images[0].url, "");
    assert_eq!(images[0].alt, "");

    let Some(CategoryData::Videos(videos)) = result.get(Category::Videos) else {
        panic!("videos missing");
    };
    assert_eq!(videos[0].width, "");
    assert_eq!(videos[0].poster, "");
}

#[test]
fn deeply_nested_elements_are_skipped_and_logged() {
    let html = format!("<img src='/top.png'>{}", nested(150, "<img src='/deep.png'>"));
    let result = extract(&html).expect("valid input");

    let Some(CategoryData::Images(images)) = result.get(Category::Images) else {
        panic!("images missing");
    };
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].url, "/top.png");

    let failures: Vec<_> = result.failures_for(Category::Images).collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].element_index, Some(1));
    assert!(failures[0].cause.contains("limit 100"));
}

#[test]
fn depth_limit_is_configurable() {
    let html = nested(30, "<h2>Deep heading</h2>");
    let tight = Options {
        max_tree_depth: 10,
        ..Options::default()
    };

    let result = extract_with_options(&html, &tight).expect("valid input");
    assert_eq!(result.failures_for(Category::Titles).count(), 1);
    assert!(matches!(result.get(Category::Titles), Some(CategoryData::Titles(t)) if t.is_empty()));

    let result = extract(&html).expect("valid input");
    assert_eq!(result.failures_for(Category::Titles).count(), 0);
}

#[test]
fn oversized_text_fails_pattern_passes_only() {
    let html = format!(
        "<h1>Catalog</h1><p>{}</p><span class='price'>$10</span>",
        "call 555-123-4567 or mail x@example.com ".repeat(20)
    );
    let tight = Options {
        max_scan_len: 100,
        ..Options::default()
    };
    let result = extract_with_options(&html, &tight).expect("valid input");

    let contact_failures: Vec<_> = result.failures_for(Category::Contact).collect();
    assert_eq!(contact_failures.len(), 1);
    assert_eq!(contact_failures[0].element_index, None);
    assert_eq!(result.failures_for(Category::Prices).count(), 1);

    let Some(CategoryData::Prices(prices)) = result.get(Category::Prices) else {
        panic!("prices missing");
    };
    assert_eq!(prices.len(), 1);
    assert!(matches!(result.get(Category::Titles), Some(CategoryData::Titles(t)) if t.len() == 1));
}

#[test]
fn other_categories_survive_a_failing_one() {
    let html = format!("<h1>Top</h1>{}", nested(120, "<form><input name='q'></form>"));
    let result = extract(&html).expect("valid input");

    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].category, Category::Forms);
    assert!(matches!(result.get(Category::Titles), Some(CategoryData::Titles(t)) if t.len() == 1));
}
