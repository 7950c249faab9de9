use std::sync::LazyLock;

use kindeck_types::Definition;
use regex::Regex;
use scraper::Selector;

use crate::html::{Pattern, clean, compiled, document, finish, regex, selector};
use crate::types::{DefinitionParser, ParseError};

static SECTION: Pattern<Selector> = LazyLock::new(|| selector("div.vg"));
static GROUP: Pattern<Selector> = LazyLock::new(|| selector("div.vg-sseq-entry-item"));
static SENSE: Pattern<Selector> = LazyLock::new(|| selector(r#"div[class*="sb-entry"]"#));

static LEADING_COLON: Pattern<Regex> = LazyLock::new(|| regex(r"^:\s"));
static LETTER_COLON: Pattern<Regex> = LazyLock::new(|| regex(r"^([a-z]) :"));
// "b (1) :" keeps the letter and the first subsense on one line
static FIRST_SUB: Pattern<Regex> = LazyLock::new(|| regex(r"([a-z])\s(\(1\))\s:"));
static NEXT_SUB: Pattern<Regex> = LazyLock::new(|| regex(r"\s?(\([2-9]\))\s:\s?"));

/// Merriam-Webster monolingual: numbered sense groups (`.vg-sseq-entry-item`),
/// each holding lettered senses (`.sb-entry`)
pub struct MerriamWebsterParser;

impl DefinitionParser for MerriamWebsterParser {
    fn name(&self) -> &str {
        "Merriam-Webster"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let Some(section) = doc.select(compiled(&SECTION)?).next() else {
            return Ok(Definition::NotFound);
        };

        let leading_colon = compiled(&LEADING_COLON)?;
        let letter_colon = compiled(&LETTER_COLON)?;
        let first_sub = compiled(&FIRST_SUB)?;
        let next_sub = compiled(&NEXT_SUB)?;
        let sense = compiled(&SENSE)?;

        let items: Vec<_> = section.select(compiled(&GROUP)?).collect();
        let single = items.len() == 1;

        let mut parsed = String::new();
        for (i, item) in items.into_iter().enumerate() {
            for (j, definition) in item.select(sense).enumerate() {
                let cleaned = clean(definition);
                let cleaned = leading_colon.replace(&cleaned, "");
                let cleaned = letter_colon.replace(&cleaned, "${1}:");
                let cleaned = first_sub.replace_all(&cleaned, "${1}: ${2}");
                let cleaned = next_sub.replace_all(&cleaned, "\n      ${1} ");

                if single {
                    parsed.push_str(&format!("{cleaned}\n"));
                } else if j == 0 {
                    parsed.push_str(&format!("{}. {cleaned}\n\n", i + 1));
                } else {
                    parsed.push_str(&format!("   {cleaned}\n\n"));
                }
            }
        }

        Ok(Definition::from_text(finish(&parsed)))
    }
}
