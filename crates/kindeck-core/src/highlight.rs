use std::sync::LazyLock;

use kindeck_config::highlight::HighlightConfig;
use kindeck_types::{CardOrientation, Language};
use regex::Regex;

use crate::language::{Inflector, SuffixInflector};

/// Syllable-split spellings such as "sel·va·gem" or "run-ning"
static SEGMENTED: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\w+(?:[-·‧]\w+)+").ok());

/// Emphasizes (orientation A) or redacts (orientation B) a word and its
/// inflected forms inside a definition or passage
pub struct Highlighter {
    inflector: Box<dyn Inflector>,
    redaction: String,
}

impl Highlighter {
    pub fn new(inflector: Box<dyn Inflector>, redaction: impl Into<String>) -> Self {
        Self {
            inflector,
            redaction: redaction.into(),
        }
    }

    pub fn for_language(config: &HighlightConfig, lang: Language) -> Self {
        Self::new(
            Box::new(SuffixInflector::for_language(config, lang)),
            config.redaction.clone(),
        )
    }

    pub fn highlight(&self, text: &str, word: &str, orientation: CardOrientation) -> String {
        let candidates = self.inflector.candidates(word);
        if candidates.is_empty() {
            return text.to_string();
        }

        let mut text = match orientation {
            CardOrientation::A => text.to_string(),
            CardOrientation::B => strip_segmented(text, &candidates),
        };

        // One candidate at a time over the whole text
        for candidate in &candidates {
            let pattern = format!("(?i){}", regex::escape(candidate));
            let re = match Regex::new(&pattern) {
                Ok(re) => re,
                Err(e) => {
                    tracing::warn!("Skipping highlight pattern for '{}': {}", candidate, e);
                    continue;
                }
            };

            let bounded: fn(Option<char>, Option<char>) -> bool = match orientation {
                CardOrientation::A => emphasis_bounds,
                CardOrientation::B => redaction_bounds,
            };
            text = replace_bounded(&text, &re, bounded, |matched| match orientation {
                CardOrientation::A => format!("<b>{matched}</b>"),
                CardOrientation::B => format!("<b>{}</b>", self.redaction),
            });
        }

        text
    }
}

/// Emphasis: start of text or whitespace before; end of text, whitespace,
/// or `. , : ?` after. Markup around an already wrapped word fails both.
fn emphasis_bounds(before: Option<char>, after: Option<char>) -> bool {
    before.is_none_or(char::is_whitespace)
        && after.is_none_or(|c| c.is_whitespace() || matches!(c, '.' | ',' | ':' | '?'))
}

/// Redaction: anything but a letter or digit on either side
fn redaction_bounds(before: Option<char>, after: Option<char>) -> bool {
    before.is_none_or(|c| !c.is_alphanumeric()) && after.is_none_or(|c| !c.is_alphanumeric())
}

fn replace_bounded(
    text: &str,
    re: &Regex,
    bounded: fn(Option<char>, Option<char>) -> bool,
    replace: impl Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut start = 0;

    while let Some(m) = re.find_at(text, start) {
        let before = text[..m.start()].chars().next_back();
        let after = text[m.end()..].chars().next();

        if m.start() < m.end() && bounded(before, after) {
            out.push_str(&text[copied..m.start()]);
            out.push_str(&replace(m.as_str()));
            copied = m.end();
            start = m.end();
        } else {
            // retry one character further so overlapping matches are not lost
            match text[m.start()..].chars().next() {
                Some(c) => start = m.start() + c.len_utf8(),
                None => break,
            }
        }

        if start >= text.len() {
            break;
        }
    }

    out.push_str(&text[copied..]);
    out
}

fn strip_segmented(text: &str, candidates: &[String]) -> String {
    let Some(re) = SEGMENTED.as_ref() else {
        return text.to_string();
    };

    re.replace_all(text, |caps: &regex::Captures<'_>| {
        let joined: String = caps[0]
            .chars()
            .filter(|c| !matches!(c, '-' | '·' | '‧'))
            .collect::<String>()
            .to_lowercase();

        if candidates.contains(&joined) {
            String::new()
        } else {
            caps[0].to_string()
        }
    })
    .into_owned()
}
