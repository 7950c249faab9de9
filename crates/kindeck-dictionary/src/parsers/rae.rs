use std::sync::LazyLock;

use kindeck_types::Definition;
use regex::Regex;
use scraper::Selector;

use crate::html::{Pattern, clean, compiled, document, finish, regex, selector};
use crate::types::{DefinitionParser, ParseError};

static RESULTS: Pattern<Selector> = LazyLock::new(|| selector("div#resultados"));
static PARAGRAPH: Pattern<Selector> = LazyLock::new(|| selector("p.j"));

static GENDER: Pattern<Regex> = LazyLock::new(|| regex(r"(^|\s)[fm]\.\s"));
static SYNONYMS: Pattern<Regex> = LazyLock::new(|| regex(r"\s?(Sin\.:)\s?"));
static ANTONYMS: Pattern<Regex> = LazyLock::new(|| regex(r"\s?(Ant\.:)\s?"));
static TRAILING_DOT: Pattern<Regex> = LazyLock::new(|| regex(r" \.$"));
static TRAILING_NOTE: Pattern<Regex> = LazyLock::new(|| regex(r" \d$"));

/// dle.rae.es monolingual Spanish: `p.j` paragraphs inside `#resultados`
pub struct RaeParser;

impl DefinitionParser for RaeParser {
    fn name(&self) -> &str {
        "Real Academia Española"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let Some(results) = doc.select(compiled(&RESULTS)?).next() else {
            return Ok(Definition::NotFound);
        };

        let gender = compiled(&GENDER)?;
        let synonyms = compiled(&SYNONYMS)?;
        let antonyms = compiled(&ANTONYMS)?;
        let trailing_dot = compiled(&TRAILING_DOT)?;
        let trailing_note = compiled(&TRAILING_NOTE)?;

        let mut parsed = String::new();
        for paragraph in results.select(compiled(&PARAGRAPH)?) {
            let cleaned = clean(paragraph).replace(" . ", ". ").replace(" , ", ", ");
            let cleaned = gender.replace_all(&cleaned, "${1}");
            let cleaned = synonyms.replace_all(&cleaned, "\n\n   ${1} ");
            let cleaned = antonyms.replace_all(&cleaned, "\n\n   ${1} ");
            let cleaned = trailing_dot.replace(&cleaned, "");
            let cleaned = trailing_note.replace(&cleaned, "");

            parsed.push_str(&format!("{cleaned}\n\n"));
        }

        Ok(Definition::from_text(finish(&parsed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_paragraphs_with_synonyms() {
        let html = r#"<div id="resultados">
            <p class="j">1. <abbr>f.</abbr> Edificio para habitar . Sin.: <span>hogar</span> , <span>morada</span> .</p>
            <p class="j">2. <abbr>m.</abbr> Linaje noble 3</p>
        </div>"#;

        assert_eq!(
            RaeParser.parse(html, "casa").unwrap(),
            Definition::Found(
                "1. Edificio para habitar.\n\n   Sin.: hogar, morada\n\n2. Linaje noble".to_string()
            )
        );
    }

    #[test]
    fn test_results_without_paragraphs_is_not_found() {
        let html = r#"<div id="resultados"><div class="item-list">Quizá quiso decir</div></div>"#;
        assert_eq!(RaeParser.parse(html, "cassa").unwrap(), Definition::NotFound);
    }

    #[test]
    fn test_words_ending_in_f_keep_their_letter() {
        let html = r#"<div id="resultados"><p class="j">1. Golf. Deporte</p></div>"#;
        assert_eq!(
            RaeParser.parse(html, "golf").unwrap(),
            Definition::Found("1. Golf. Deporte".to_string())
        );
    }
}
