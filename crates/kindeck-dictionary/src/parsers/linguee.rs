use std::sync::LazyLock;

use kindeck_types::Definition;
use scraper::Selector;

use crate::html::{Pattern, clean, compiled, document, finish, first, selector};
use crate::types::{DefinitionParser, ParseError};

const MAX_EXTRA_EXAMPLES: usize = 5;

static MAIN_TERM: Pattern<Selector> = LazyLock::new(|| selector(".isMainTerm"));
static EXACT: Pattern<Selector> = LazyLock::new(|| selector(".exact"));
static FEATURED: Pattern<Selector> =
    LazyLock::new(|| selector(".translation.sortablemg.featured"));
static DESCRIPTION: Pattern<Selector> = LazyLock::new(|| selector(".translation_desc"));
static EXAMPLE_LINES: Pattern<Selector> = LazyLock::new(|| selector(".example_lines"));
static EXAMPLE: Pattern<Selector> = LazyLock::new(|| selector(".example.line"));
static SOURCE_TEXT: Pattern<Selector> = LazyLock::new(|| selector(".tag_s"));
static TARGET_TEXT: Pattern<Selector> = LazyLock::new(|| selector(".tag_t"));
static LESS_COMMON: Pattern<Selector> = LazyLock::new(|| selector(".translation_group"));
static INEXACT: Pattern<Selector> = LazyLock::new(|| selector(".example_lines.inexact"));
static LEMMA: Pattern<Selector> = LazyLock::new(|| selector(".lemma.singleline"));

/// Linguee pages: featured translations with their example lines, less
/// common translations, then corpus examples
pub struct LingueeParser;

impl DefinitionParser for LingueeParser {
    fn name(&self) -> &str {
        "Linguee"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let Some(main) = doc.select(compiled(&MAIN_TERM)?).next() else {
            return Ok(Definition::NotFound);
        };
        let Some(exact) = first(main, compiled(&EXACT)?) else {
            return Ok(Definition::NotFound);
        };

        let description = compiled(&DESCRIPTION)?;
        let example_lines = compiled(&EXAMPLE_LINES)?;
        let example = compiled(&EXAMPLE)?;
        let source_text = compiled(&SOURCE_TEXT)?;
        let target_text = compiled(&TARGET_TEXT)?;

        let mut parsed = String::new();

        let featured: Vec<_> = exact.select(compiled(&FEATURED)?).collect();
        let count = featured.len();

        for (idx, translation) in featured.into_iter().enumerate() {
            let desc = first(translation, description)
                .map(clean)
                .unwrap_or_default();

            match (count, idx) {
                (1, _) => parsed.push_str(&format!("{desc}\n")),
                (_, 0) => parsed.push_str(&format!("1. {desc}\n")),
                (_, i) => parsed.push_str(&format!("\n{}. {desc}\n", i + 1)),
            }

            let Some(lines) = first(translation, example_lines) else {
                continue;
            };
            for line in lines.select(example) {
                let s = first(line, source_text).map(clean).unwrap_or_default();
                let t = first(line, target_text).map(clean).unwrap_or_default();
                parsed.push_str(&format!("   {s} => {t}\n"));
            }
        }

        if let Some(group) = first(exact, compiled(&LESS_COMMON)?) {
            let alternatives = clean(group).replace("less common:", "\n\nless common:");
            parsed.push_str(&format!("{alternatives}\n"));
        }

        if let Some(section) = first(main, compiled(&INEXACT)?) {
            let examples: Vec<String> = section
                .select(compiled(&LEMMA)?)
                .take(MAX_EXTRA_EXAMPLES)
                .map(|e| clean(e).replace('-', "=>"))
                .collect();

            if !examples.is_empty() {
                parsed.push_str("\nExamples:\n");
                for example in examples {
                    parsed.push_str(&format!("{example}\n"));
                }
            }
        }

        Ok(Definition::from_text(finish(&parsed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn translation(desc: &str, examples: &[(&str, &str)]) -> String {
        let lines: String = examples
            .iter()
            .map(|(s, t)| {
                format!(
                    r#"<div class="example line"><span class="tag_s">{s}</span> — <span class="tag_t">{t}</span></div>"#
                )
            })
            .collect();
        format!(
            r#"<div class="translation sortablemg featured">
                 <div class="translation_desc"><a>{desc}</a> <span>verb</span></div>
                 <div class="example_lines">{lines}</div>
               </div>"#
        )
    }

    #[test]
    fn test_numbered_translations_with_examples() {
        let html = format!(
            r#"<div class="isMainTerm"><div class="exact">{}{}
                 <div class="translation_group">less common: filer · fuir</div>
               </div>
               <div class="example_lines inexact">
                 <div class="lemma singleline">run away - s'enfuir</div>
                 <div class="lemma singleline">run out - manquer</div>
               </div></div>"#,
            translation("courir", &[("to run fast", "courir vite")]),
            translation("diriger", &[("run a company", "diriger une entreprise")]),
        );

        let definition = LingueeParser.parse(&html, "run").unwrap();
        assert_eq!(
            definition,
            Definition::Found(
                "1. courir verb\n   to run fast => courir vite\n\n\
                 2. diriger verb\n   run a company => diriger une entreprise\n\n\n\
                 less common: filer · fuir\n\n\
                 Examples:\nrun away => s'enfuir\nrun out => manquer"
                    .to_string()
            )
        );
    }

    #[test]
    fn test_single_translation_is_not_numbered() {
        let html = format!(
            r#"<div class="isMainTerm"><div class="exact">{}</div></div>"#,
            translation("maison", &[])
        );

        assert_eq!(
            LingueeParser.parse(&html, "house").unwrap(),
            Definition::Found("maison verb".to_string())
        );
    }

    #[test]
    fn test_extra_examples_are_capped() {
        let lemmas: String = (0..8)
            .map(|i| format!(r#"<div class="lemma singleline">ex{i} - tr{i}</div>"#))
            .collect();
        let html = format!(
            r#"<div class="isMainTerm"><div class="exact">{}</div>
               <div class="example_lines inexact">{lemmas}</div></div>"#,
            translation("maison", &[])
        );

        let Definition::Found(text) = LingueeParser.parse(&html, "house").unwrap() else {
            panic!("expected a definition");
        };
        assert!(text.contains("ex4 => tr4"));
        assert!(!text.contains("ex5"));
    }

    #[test]
    fn test_no_main_term_is_not_found() {
        let html = r#"<div class="noresults">No results</div>"#;
        assert_eq!(LingueeParser.parse(html, "xyz").unwrap(), Definition::NotFound);
    }
}
