//! Intent matching: maps a free-text request onto extraction categories.
//!
//! A request like "grab every price and the contact emails" is tokenized,
//! filtered, and scored against a keyword taxonomy. A token matches a
//! keyword when either contains the other, so "titles" hits "title"
//! without stemming.
//!
//! Linguistic preprocessing is an injected [`QueryPreprocessor`]. The default
//! [`NoopPreprocessor`] reports itself unavailable, which makes the classifier
//! fall back to plain alphanumeric tokens.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::category::{Category, CategorySet};
use crate::error::Error;
use crate::patterns;

/// Fraction of the best score another intent needs to be selected too.
pub const DEFAULT_INTENT_THRESHOLD: f64 = 0.7;

/// A kind of content a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    Title,
    Description,
    Image,
    Link,
    Table,
    Contact,
    Price,
    Date,
    Product,
    Author,
    Category,
    Social,
    Video,
    Form,
    Meta,
}

impl IntentKind {
    /// Every intent kind, in scoring order.
    pub const ALL: [IntentKind; 15] = [
        IntentKind::Title,
        IntentKind::Description,
        IntentKind::Image,
        IntentKind::Link,
        IntentKind::Table,
        IntentKind::Contact,
        IntentKind::Price,
        IntentKind::Date,
        IntentKind::Product,
        IntentKind::Author,
        IntentKind::Category,
        IntentKind::Social,
        IntentKind::Video,
        IntentKind::Form,
        IntentKind::Meta,
    ];

    /// Keywords scored for this intent.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            IntentKind::Title => &["title", "heading", "header", "h1", "h2", "h3", "headline", "caption", "name"],
            IntentKind::Description => &[
                "description", "desc", "summary", "content", "text", "paragraph", "detail", "about", "info",
            ],
            IntentKind::Image => &["image", "img", "picture", "photo", "thumbnail", "graphic", "visual", "media"],
            IntentKind::Link => &["link", "url", "href", "anchor", "hyperlink", "reference"],
            IntentKind::Table => &["table", "grid", "data", "list", "spreadsheet", "chart"],
            IntentKind::Contact => &["email", "phone", "contact", "address", "tel", "telephone", "mail"],
            IntentKind::Price => &["price", "cost", "amount", "value", "$", "fee", "rate", "charge", "payment"],
            IntentKind::Date => &["date", "time", "published", "updated", "timestamp", "when", "schedule"],
            IntentKind::Product => &["product", "item", "goods", "merchandise", "article"],
            IntentKind::Author => &["author", "writer", "by", "creator", "publisher"],
            IntentKind::Category => &["category", "tag", "topic", "section", "type", "class"],
            IntentKind::Social => &["social", "twitter", "facebook", "instagram", "linkedin", "share"],
            IntentKind::Video => &["video", "youtube", "vimeo", "media", "embed"],
            IntentKind::Form => &["form", "input", "search", "subscribe", "newsletter"],
            IntentKind::Meta => &["meta", "metadata", "seo", "keywords", "tags"],
        }
    }

    /// Extraction categories that serve this intent.
    #[must_use]
    pub const fn categories(self) -> &'static [Category] {
        match self {
            IntentKind::Title => &[Category::Titles],
            IntentKind::Description => &[Category::Descriptions],
            IntentKind::Image => &[Category::Images],
            IntentKind::Link => &[Category::Links],
            IntentKind::Table => &[Category::Tables],
            IntentKind::Contact => &[Category::Contact],
            IntentKind::Price | IntentKind::Product => &[Category::Prices],
            IntentKind::Video => &[Category::Videos],
            IntentKind::Form => &[Category::Forms],
            IntentKind::Meta | IntentKind::Date | IntentKind::Author | IntentKind::Category => &[Category::Meta],
            IntentKind::Social => &[Category::Links, Category::Contact],
        }
    }
}

/// Result of intent matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentMatch {
    /// Nothing scored; extract everything.
    All,
    /// Selected intents in scoring order.
    Kinds(Vec<IntentKind>),
}

impl IntentMatch {
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, IntentMatch::All)
    }

    #[must_use]
    pub fn contains(&self, kind: IntentKind) -> bool {
        match self {
            IntentMatch::All => true,
            IntentMatch::Kinds(kinds) => kinds.contains(&kind),
        }
    }

    /// Category set covering every selected intent.
    #[must_use]
    pub fn categories(&self) -> CategorySet {
        match self {
            IntentMatch::All => CategorySet::all(),
            IntentMatch::Kinds(kinds) => kinds
                .iter()
                .flat_map(|kind| kind.categories().iter().copied())
                .collect(),
        }
    }
}

/// Named structured-data patterns for [`extract_pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Email,
    Phone,
    Price,
    Date,
    Url,
    Social,
}

impl PatternKind {
    fn regex(self) -> &'static Regex {
        match self {
            PatternKind::Email => &patterns::EMAIL,
            PatternKind::Phone => &patterns::PHONE,
            PatternKind::Price => &patterns::PRICE,
            PatternKind::Date => &patterns::DATE,
            PatternKind::Url => &patterns::URL,
            PatternKind::Social => &patterns::SOCIAL,
        }
    }
}

impl FromStr for PatternKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(PatternKind::Email),
            "phone" => Ok(PatternKind::Phone),
            "price" => Ok(PatternKind::Price),
            "date" => Ok(PatternKind::Date),
            "url" => Ok(PatternKind::Url),
            "social" | "social_media" => Ok(PatternKind::Social),
            _ => Err(Error::UnknownPattern(s.to_string())),
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PatternKind::Email => "email",
            PatternKind::Phone => "phone",
            PatternKind::Price => "price",
            PatternKind::Date => "date",
            PatternKind::Url => "url",
            PatternKind::Social => "social",
        };
        f.write_str(name)
    }
}

/// Every match of a named pattern, in order, duplicates included.
#[must_use]
pub fn extract_pattern(text: &str, pattern: PatternKind) -> Vec<String> {
    pattern
        .regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// [`extract_pattern`] by name; unknown names yield no matches.
#[must_use]
pub fn extract_named_pattern(text: &str, name: &str) -> Vec<String> {
    name.parse::<PatternKind>()
        .map(|kind| extract_pattern(text, kind))
        .unwrap_or_default()
}

/// Linguistic preprocessing capability injected into the classifier.
pub trait QueryPreprocessor {
    /// Split a query into lower-case words, trimming surrounding
    /// punctuation. Inner punctuation stays, so "e-mail" is one token.
    fn tokenize(&self, query: &str) -> Vec<String> {
        query
            .to_lowercase()
            .split_whitespace()
            .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Whether stop-word filtering and lemmatization are available.
    fn is_available(&self) -> bool;

    fn is_stop_word(&self, _token: &str) -> bool {
        false
    }

    fn lemmatize(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Fallback with no linguistic resources.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPreprocessor;

impl QueryPreprocessor for NoopPreprocessor {
    fn is_available(&self) -> bool {
        false
    }
}

/// Built-in English stop-word filtering; tokens are not lemmatized.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopWordPreprocessor;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "all", "an", "and", "any", "are", "as", "at", "be", "but", "can", "do", "does",
    "each", "every", "for", "from", "get", "give", "grab", "i", "in", "into", "is", "it", "its",
    "just", "me", "my", "of", "on", "or", "page", "please", "show", "site", "some", "that", "the",
    "their", "them", "these", "this", "those", "to", "want", "what", "which", "with", "you", "your",
];

impl QueryPreprocessor for StopWordPreprocessor {
    fn is_available(&self) -> bool {
        true
    }

    fn is_stop_word(&self, token: &str) -> bool {
        ENGLISH_STOP_WORDS.contains(&token)
    }
}

/// Scores requests against the keyword taxonomy.
pub struct IntentClassifier {
    preprocessor: Box<dyn QueryPreprocessor + Send + Sync>,
    threshold: f64,
}

impl fmt::Debug for IntentClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntentClassifier")
            .field("available", &self.preprocessor.is_available())
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentClassifier {
    /// Classifier with the no-op preprocessor and the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_preprocessor(NoopPreprocessor)
    }

    #[must_use]
    pub fn with_preprocessor<P>(preprocessor: P) -> Self
    where
        P: QueryPreprocessor + Send + Sync + 'static,
    {
        Self {
            preprocessor: Box::new(preprocessor),
            threshold: DEFAULT_INTENT_THRESHOLD,
        }
    }

    /// Override the near-tie threshold (fraction of the best score).
    #[must_use]
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Keep alphanumeric tokens; drop stop words and lemmatize when the
    /// preprocessor supports it.
    #[must_use]
    pub fn preprocess_query(&self, tokens: &[String]) -> Vec<String> {
        let alphanumeric = tokens
            .iter()
            .filter(|t| !t.is_empty() && t.chars().all(char::is_alphanumeric));

        if !self.preprocessor.is_available() {
            return alphanumeric.cloned().collect();
        }

        alphanumeric
            .filter(|t| !self.preprocessor.is_stop_word(t))
            .map(|t| self.preprocessor.lemmatize(t))
            .collect()
    }

    /// Score of every intent with at least one keyword hit, in taxonomy order.
    #[must_use]
    pub fn score(&self, tokens: &[String]) -> Vec<(IntentKind, usize)> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        IntentKind::ALL
            .into_iter()
            .map(|kind| {
                let hits = lowered
                    .iter()
                    .map(|token| {
                        kind.keywords()
                            .iter()
                            .filter(|kw| kw.contains(token.as_str()) || token.contains(*kw))
                            .count()
                    })
                    .sum::<usize>();
                (kind, hits)
            })
            .filter(|&(_, hits)| hits > 0)
            .collect()
    }

    /// Select every intent scoring within the threshold of the best one.
    #[must_use]
    pub fn match_intent(&self, tokens: &[String]) -> IntentMatch {
        let scores = self.score(tokens);
        let Some(max) = scores.iter().map(|&(_, s)| s).max() else {
            return IntentMatch::All;
        };

        let cutoff = max as f64 * self.threshold;
        let kinds: Vec<IntentKind> = scores
            .into_iter()
            .filter(|&(_, s)| s as f64 >= cutoff)
            .map(|(kind, _)| kind)
            .collect();

        if kinds.is_empty() {
            IntentMatch::All
        } else {
            IntentMatch::Kinds(kinds)
        }
    }

    /// Tokenize, filter and match a free-text request.
    #[must_use]
    pub fn classify_query(&self, query: &str) -> IntentMatch {
        let tokens = self.preprocessor.tokenize(query);
        let tokens = self.preprocess_query(&tokens);
        let matched = self.match_intent(&tokens);
        debug!(query, ?tokens, ?matched, "classified request");
        matched
    }

    /// Categories to extract for a free-text request.
    #[must_use]
    pub fn classify(&self, query: &str) -> CategorySet {
        self.classify_query(query).categories()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn price_tokens_select_price() {
        let classifier = IntentClassifier::new();
        let matched = classifier.match_intent(&tokens(&["price", "cost"]));
        assert!(matched.contains(IntentKind::Price));
        assert!(!matched.is_all());
        assert!(matched.categories().contains(Category::Prices));
    }

    #[test]
    fn empty_tokens_select_all() {
        let classifier = IntentClassifier::new();
        assert_eq!(classifier.match_intent(&[]), IntentMatch::All);
        assert!(classifier.classify("").is_all());
    }

    #[test]
    fn unmatched_tokens_select_all() {
        let classifier = IntentClassifier::new();
        assert!(classifier.match_intent(&tokens(&["zzzz", "qqq"])).is_all());
    }

    #[test]
    fn plural_tokens_match_singular_keywords() {
        let classifier = IntentClassifier::new();
        let scores = classifier.score(&tokens(&["images"]));
        assert!(scores.iter().any(|&(k, s)| k == IntentKind::Image && s >= 1));
    }

    #[test]
    fn near_ties_are_inclusive() {
        let classifier = IntentClassifier::new();
        let matched = classifier.match_intent(&tokens(&["address", "table"]));
        assert!(matched.contains(IntentKind::Contact));
        assert!(matched.contains(IntentKind::Table));
    }

    #[test]
    fn threshold_is_configurable() {
        // "video" hits Video once; "youtube" hits Video again; "photo" hits Image once.
        let toks = tokens(&["video", "youtube", "photo"]);
        let strict = IntentClassifier::new().threshold(1.0).match_intent(&toks);
        assert_eq!(strict, IntentMatch::Kinds(vec![IntentKind::Video]));

        let loose = IntentClassifier::new().threshold(0.5).match_intent(&toks);
        assert!(loose.contains(IntentKind::Image));
    }

    #[test]
    fn noop_preprocessor_keeps_all_alphanumeric_tokens() {
        let classifier = IntentClassifier::new();
        let out = classifier.preprocess_query(&tokens(&["the", "prices", "$", "e-mail", "h1"]));
        assert_eq!(out, tokens(&["the", "prices", "h1"]));
    }

    #[test]
    fn stop_word_preprocessor_drops_filler() {
        let classifier = IntentClassifier::with_preprocessor(StopWordPreprocessor);
        let out = classifier.preprocess_query(&tokens(&["show", "me", "the", "prices"]));
        assert_eq!(out, tokens(&["prices"]));
    }

    #[test]
    fn tokenize_trims_punctuation_but_keeps_inner_hyphens() {
        let toks = StopWordPreprocessor.tokenize("What does it cost? (e-mail, please)");
        assert_eq!(toks, tokens(&["what", "does", "it", "cost", "e-mail", "please"]));
    }

    #[test]
    fn hyphenated_words_are_dropped_before_matching() {
        let classifier = IntentClassifier::with_preprocessor(StopWordPreprocessor);
        assert_eq!(
            classifier.classify_query("list all e-mail"),
            IntentMatch::Kinds(vec![IntentKind::Table])
        );
        assert_eq!(
            classifier.classify_query("e-mail addresses"),
            IntentMatch::Kinds(vec![IntentKind::Contact])
        );
    }

    #[test]
    fn classify_maps_social_to_links_and_contact() {
        let set = IntentClassifier::new().classify("Social handles");
        assert!(set.contains(Category::Links));
        assert!(set.contains(Category::Contact));
    }

    #[test]
    fn extract_pattern_keeps_duplicates_in_order() {
        let text = "Mail a@x.com, then b@y.org, then a@x.com again";
        assert_eq!(
            extract_pattern(text, PatternKind::Email),
            vec!["a@x.com", "b@y.org", "a@x.com"]
        );
    }

    #[test]
    fn named_patterns_and_unknown_names() {
        assert_eq!(extract_named_pattern("follow @rustlang", "social_media"), vec!["@rustlang"]);
        assert_eq!(extract_named_pattern("see https://x.com/a", "URL"), vec!["https://x.com/a"]);
        assert!(extract_named_pattern("anything", "zipcode").is_empty());
        assert!(matches!("zipcode".parse::<PatternKind>(), Err(Error::UnknownPattern(_))));
    }
}
