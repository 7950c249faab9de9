use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A word looked up while reading, with the passage it was first seen in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupWord {
    pub word: String,
    /// HTML-safe text, the word itself already wrapped in `<b>`
    pub usage_passage: String,
}

impl LookupWord {
    pub fn new(word: impl Into<String>, usage_passage: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            usage_passage: usage_passage.into(),
        }
    }

    /// Wrap every literal occurrence of `word` in a raw passage
    pub fn from_raw_usage(word: &str, passage: &str) -> Self {
        let usage_passage = if word.is_empty() {
            passage.to_string()
        } else {
            passage.replace(word, &format!("<b>{word}</b>"))
        };

        Self::new(word, usage_passage)
    }
}

/// Outcome of parsing one dictionary page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Definition {
    Found(String),
    /// Reserved marker: the page had no usable definition
    NotFound,
}

impl Definition {
    /// `NotFound` when nothing but whitespace is left
    pub fn from_text(text: impl AsRef<str>) -> Self {
        let trimmed = text.as_ref().trim();
        if trimmed.is_empty() {
            Definition::NotFound
        } else {
            Definition::Found(trimmed.to_string())
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Definition::Found(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Definition::Found(text) => Some(text),
            Definition::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDefinition {
    pub word: String,
    /// Headword the site redirected to, or the word itself
    pub title: String,
    pub definition: Definition,
}

/// Which side shows the word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardOrientation {
    /// Front: word and usage passage / Back: definitions
    #[default]
    A,
    /// Front: definitions with the word redacted / Back: word and usage passage
    B,
}

impl CardOrientation {
    pub fn describe(self) -> &'static str {
        match self {
            CardOrientation::A => {
                "Front: word and usage example from book / Back: definitions"
            }
            CardOrientation::B => {
                "Front: definitions / Back: word and usage example from book"
            }
        }
    }
}

impl fmt::Display for CardOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardOrientation::A => f.write_str("A"),
            CardOrientation::B => f.write_str("B"),
        }
    }
}

impl FromStr for CardOrientation {
    type Err = InvalidOrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(CardOrientation::A),
            "B" | "b" => Ok(CardOrientation::B),
            other => Err(InvalidOrientationError(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid card type '{0}', expected A or B")]
pub struct InvalidOrientationError(pub String);

/// One flashcard, both sides already rendered to HTML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front_html: String,
    pub back_html: String,
}
