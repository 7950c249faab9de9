use std::sync::LazyLock;

use kindeck_types::Definition;
use regex::Regex;
use scraper::Selector;

use crate::html::{Pattern, clean, compiled, document, finish, regex, selector};
use crate::types::{DefinitionParser, ParseError};

static DIVISION: Pattern<Selector> = LazyLock::new(|| selector(".DivisionDefinition"));

static SENTENCE_END: Pattern<Regex> = LazyLock::new(|| regex(r"([^\d\s]\.)(\S)"));
static LITERARY: Pattern<Regex> = LazyLock::new(|| regex(r"\((Litt.raire)\.\)|(Litt.raire)\."));
static SYNONYMS: Pattern<Regex> = LazyLock::new(|| regex(r"\s*(Synonymes?:)"));
static ANTONYMS: Pattern<Regex> = LazyLock::new(|| regex(r"\s*(Contraires?:)"));
static SPACES: Pattern<Regex> = LazyLock::new(|| regex(r" {2,}"));

/// larousse.fr monolingual French: one `.DivisionDefinition` per sense
pub struct LarousseFrenchParser;

impl DefinitionParser for LarousseFrenchParser {
    fn name(&self) -> &str {
        "Larousse (français)"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;

        let sentence_end = compiled(&SENTENCE_END)?;
        let literary = compiled(&LITERARY)?;
        let synonyms = compiled(&SYNONYMS)?;
        let antonyms = compiled(&ANTONYMS)?;
        let spaces = compiled(&SPACES)?;

        let mut parsed = String::new();
        for division in doc.select(compiled(&DIVISION)?) {
            let cleaned = clean(division).replace(" :", ":").replace(" - ", " / ");
            let cleaned = sentence_end.replace_all(&cleaned, "${1} ${2}");
            let cleaned = literary.replace_all(&cleaned, "(${1}${2}):");
            let cleaned = synonyms.replace_all(&cleaned, "\n\n${1}");
            let cleaned = antonyms.replace_all(&cleaned, "\n\n${1}");
            let cleaned = spaces.replace_all(&cleaned, " ");

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
    fn test_synonyms_and_antonyms_start_new_paragraphs() {
        let html = r#"
            <li class="DivisionDefinition">Édifice servant d'habitation.Synonymes : demeure - logis
              Contraire : ruine</li>
            <li class="DivisionDefinition">Littéraire. Famille noble.</li>"#;

        assert_eq!(
            LarousseFrenchParser.parse(html, "maison").unwrap(),
            Definition::Found(
                "Édifice servant d'habitation.\n\nSynonymes: demeure / logis\n\nContraire: ruine\n\n\
                 (Littéraire): Famille noble."
                    .to_string()
            )
        );
    }

    #[test]
    fn test_no_division_is_not_found() {
        assert_eq!(
            LarousseFrenchParser
                .parse(r#"<div class="corrector">Essayez</div>"#, "xyz")
                .unwrap(),
            Definition::NotFound
        );
    }
}
