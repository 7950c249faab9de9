use std::sync::LazyLock;

use kindeck_core::{DefaultPreprocessor, Preprocessor};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use unicode_normalization::UnicodeNormalization;

use crate::types::ParseError;

pub(crate) fn document(html: &str) -> Result<Html, ParseError> {
    if html.trim().is_empty() {
        return Err(ParseError::Malformed("empty document".to_string()));
    }
    if !html.contains('<') {
        return Err(ParseError::Malformed("no markup found".to_string()));
    }

    Ok(Html::parse_document(html))
}

/// A selector or regex compiled once, on first use
pub(crate) type Pattern<T> = LazyLock<Result<T, ParseError>>;

pub(crate) fn compiled<T>(pattern: &'static Pattern<T>) -> Result<&'static T, ParseError> {
    LazyLock::force(pattern).as_ref().map_err(Clone::clone)
}

pub(crate) fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidPattern {
        pattern: css.to_string(),
        reason: e.to_string(),
    })
}

pub(crate) fn regex(pattern: &str) -> Result<Regex, ParseError> {
    Regex::new(pattern).map_err(|e| ParseError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Text content of an element: text nodes joined by single spaces, NFC
pub(crate) fn clean(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<Vec<_>>().join(" ");
    DefaultPreprocessor.process(&raw)
}

pub(crate) fn first<'a>(scope: ElementRef<'a>, css: &Selector) -> Option<ElementRef<'a>> {
    scope.select(css).next()
}

/// Final pass over assembled output
pub(crate) fn finish(parsed: &str) -> String {
    parsed.nfc().collect()
}
