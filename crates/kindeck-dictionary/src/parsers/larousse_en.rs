use std::sync::LazyLock;

use kindeck_types::Definition;
use regex::Regex;
use scraper::Selector;

use crate::html::{Pattern, clean, compiled, document, finish, regex, selector};
use crate::types::{DefinitionParser, ParseError};

static GERMAN_BLOCK: Pattern<Selector> = LazyLock::new(|| selector(".content.en-de"));
static SPANISH_BLOCK: Pattern<Selector> = LazyLock::new(|| selector(".content.en-es"));
static SENSE_NUMBER: Pattern<Regex> = LazyLock::new(|| regex(r"\s?(\d\.)"));
static CONJUGATION: Pattern<Regex> = LazyLock::new(|| regex(r"Conjugation\s?"));

/// larousse.com English→German: every `.content.en-de` block is one entry
pub struct LarousseEnglishGermanParser;

impl DefinitionParser for LarousseEnglishGermanParser {
    fn name(&self) -> &str {
        "Larousse (English-German)"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let numbered = compiled(&SENSE_NUMBER)?;

        let mut parsed = String::new();
        for block in doc.select(compiled(&GERMAN_BLOCK)?) {
            let text = clean(block);
            let cleaned = numbered.replace_all(&text, "\n\n${1}");
            parsed.push_str(&format!("{cleaned}\n"));
        }

        Ok(Definition::from_text(finish(&parsed)))
    }
}

/// larousse.com English→Spanish: a single `.content.en-es` block
pub struct LarousseEnglishSpanishParser;

impl DefinitionParser for LarousseEnglishSpanishParser {
    fn name(&self) -> &str {
        "Larousse (English-Spanish)"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let Some(block) = doc.select(compiled(&SPANISH_BLOCK)?).next() else {
            return Ok(Definition::NotFound);
        };

        let text = clean(block);
        let cleaned = compiled(&CONJUGATION)?.replace_all(&text, "");
        let cleaned = compiled(&SENSE_NUMBER)?.replace_all(&cleaned, "\n${1}");

        Ok(Definition::from_text(finish(&cleaned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_english_german_senses_on_new_paragraphs() {
        let html = r#"<div class="content en-de">
            <span>run</span> <span>verb</span> 1. <a>laufen</a> 2. <a>rennen</a>
        </div>"#;

        assert_eq!(
            LarousseEnglishGermanParser.parse(html, "run").unwrap(),
            Definition::Found("run verb\n\n1. laufen\n\n2. rennen".to_string())
        );
    }

    #[test]
    fn test_english_german_without_block_is_not_found() {
        assert_eq!(
            LarousseEnglishGermanParser
                .parse("<html><body></body></html>", "run")
                .unwrap(),
            Definition::NotFound
        );
    }

    #[test]
    fn test_english_spanish_strips_conjugation_label() {
        let html = r#"<div class="content en-es">
            run <a>Conjugation</a> verb 1. <a>correr</a> 2. <a>dirigir</a>
        </div>"#;

        assert_eq!(
            LarousseEnglishSpanishParser.parse(html, "run").unwrap(),
            Definition::Found("run verb\n1. correr\n2. dirigir".to_string())
        );
    }
}
