use std::sync::LazyLock;

use kindeck_types::Definition;
use regex::Regex;
use scraper::Selector;

use crate::html::{Pattern, clean, compiled, document, finish, regex, selector};
use crate::types::{DefinitionParser, ParseError};

const NOT_FOUND_BANNER: &str = "O verbete não foi encontrado";

static CONTAINER: Pattern<Selector> = LazyLock::new(|| selector("#main-container"));

/// "acepção 2" or "acepções 2 a 4": numbers that must not start a paragraph
static BACK_REFERENCE: Pattern<Regex> =
    LazyLock::new(|| regex(r"(?i)\bacepç(ão|ões)\b\s+(\d+)((\s+a\s+)(\d+))?"));
static SENSE_NUMBER: Pattern<Regex> = LazyLock::new(|| regex(r"\s?(\b\d\d?) "));
static PROTECTED_NUMBER: Pattern<Regex> = LazyLock::new(|| regex(r"_(\d\d?)_"));
static SECTION_TITLE: Pattern<Regex> = LazyLock::new(|| regex(r"\s?(\p{Lu}{5,})\s?"));

/// michaelis.uol.com.br monolingual Brazilian Portuguese.
///
/// The page is one text run; numbered senses are split onto paragraphs,
/// except numbers that refer back to an earlier sense ("acepção 2").
pub struct MichaelisParser;

impl DefinitionParser for MichaelisParser {
    fn name(&self) -> &str {
        "Michaelis"
    }

    fn parse(&self, html: &str, word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let Some(container) = doc.select(compiled(&CONTAINER)?).next() else {
            return Ok(Definition::NotFound);
        };

        let cleaned = clean(container);
        if cleaned.starts_with(NOT_FOUND_BANNER) {
            return Ok(Definition::NotFound);
        }

        let cleaned = compiled(&BACK_REFERENCE)?
            .replace_all(&cleaned, "acepç${1} _${2}_${4}_${5}_")
            .into_owned();
        let cleaned = compiled(&SENSE_NUMBER)?
            .replace_all(&cleaned, "\n\n${1}. ")
            .into_owned();
        let cleaned = compiled(&PROTECTED_NUMBER)?
            .replace_all(&cleaned, "${1}")
            .into_owned();
        let mut cleaned = cleaned.replace("__", "");

        let mut chars = word.chars();
        chars.next_back();
        let stem = chars.as_str();
        if !stem.is_empty() {
            let plural = format!(r"(?i)\s?({}..?s s(f|m) pl)", regex::escape(stem));
            cleaned = regex(&plural)?
                .replace_all(&cleaned, "\n\n${1}:")
                .into_owned();
        }

        let cleaned = compiled(&SECTION_TITLE)?.replace_all(&cleaned, "\n\n${1}\n");

        Ok(Definition::from_text(finish(&cleaned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numbered_senses_and_back_references() {
        let html = r#"<div id="main-container">
            casa sf 1 Edifício de habitação. 2 Família, conforme acepção 1.
        </div>"#;

        assert_eq!(
            MichaelisParser.parse(html, "casa").unwrap(),
            Definition::Found(
                "casa sf\n\n1. Edifício de habitação.\n\n2. Família, conforme acepção 1.".to_string()
            )
        );
    }

    #[test]
    fn test_plural_section_and_capitalized_headers() {
        let html = r#"<div id="main-container">
            casa sf 1 Moradia. casas sf pl Bens. EXPRESSÕES casa da moeda
        </div>"#;

        assert_eq!(
            MichaelisParser.parse(html, "casa").unwrap(),
            Definition::Found(
                "casa sf\n\n1. Moradia.\n\ncasas sf pl: Bens.\n\nEXPRESSÕES\ncasa da moeda"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_not_found_banner() {
        let html = r#"<div id="main-container">O verbete não foi encontrado. Sugestões: cama</div>"#;
        assert_eq!(
            MichaelisParser.parse(html, "cassa").unwrap(),
            Definition::NotFound
        );
    }
}
