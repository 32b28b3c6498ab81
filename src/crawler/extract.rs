use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use thiserror::Error;

/// Anchors carrying an href attribute
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("static selector is valid"));

/// Returns every anchor target starting with `http`, in document order,
/// duplicates included. The prefix filter is deliberately narrow: it drops
/// relative links, `mailto:`, `javascript:`, fragments and protocol-relative
/// `//` links. The parser is tolerant, so garbage input simply yields no
/// anchors.
pub fn extract_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| href.starts_with("http"))
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Error)]
#[error("invalid email pattern {pattern:?}: {source}")]
pub struct PatternError {
    pattern: String,
    #[source]
    source: regex::Error,
}

/// Find-all email matcher over raw page text. The pattern is compiled once,
/// before the first fetch, so a bad pattern fails the run at startup instead
/// of mid-crawl. An empty pattern disables extraction.
pub struct EmailExtractor {
    pattern: Option<Regex>,
}

impl EmailExtractor {
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        if pattern.is_empty() {
            return Ok(Self { pattern: None });
        }
        let compiled = Regex::new(pattern).map_err(|source| PatternError {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: Some(compiled),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.pattern.is_some()
    }

    /// All matches in order of first character position, duplicates included.
    /// The run-wide deduplicated total is kept by the runner, not here.
    pub fn extract(&self, text: &str) -> Vec<String> {
        match &self.pattern {
            Some(regex) => regex.find_iter(text).map(|m| m.as_str().to_string()).collect(),
            None => Vec::new(),
        }
    }
}
