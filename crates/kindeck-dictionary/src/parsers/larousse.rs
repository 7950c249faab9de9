use std::sync::LazyLock;

use kindeck_types::Definition;
use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::html::{Pattern, clean, compiled, document, finish, regex, selector};
use crate::types::{DefinitionParser, ParseError};

static ARTICLE: Pattern<Selector> = LazyLock::new(|| selector("#BlocArticle"));
static HEADER_ZONE: Pattern<Selector> = LazyLock::new(|| selector(".ZoneEntree"));
static TEXT_ZONE: Pattern<Selector> = LazyLock::new(|| selector(".ZoneTexte"));
static ITEM: Pattern<Selector> = LazyLock::new(|| selector(".itemZONESEM"));

static CONJUGATION: Pattern<Regex> = LazyLock::new(|| regex(r"(?:Conjugaison|Conjugation)\s?"));
static DOMAIN_OPEN: Pattern<Regex> = LazyLock::new(|| regex(r"(\[)(\w+)(\s-\s)"));
static DOMAIN_BREAK: Pattern<Regex> = LazyLock::new(|| regex(r"\s\[\s-\s"));

/// Larousse bilingual pages: `#BlocArticle` holds header zones
/// (`.ZoneEntree`, part of speech etc.) and definition zones (`.ZoneTexte`)
pub struct LarousseBilingualParser;

fn strip(text: &str) -> Result<String, ParseError> {
    Ok(compiled(&CONJUGATION)?.replace_all(text, "").trim().to_string())
}

fn header(zone: ElementRef<'_>) -> Result<String, ParseError> {
    Ok(format!("\n{}\n\n", strip(&clean(zone))?))
}

fn definitions(zone: ElementRef<'_>) -> Result<String, ParseError> {
    let items: Vec<_> = zone.select(compiled(&ITEM)?).collect();
    if items.is_empty() {
        return Ok(format!("{}\n", strip(&clean(zone))?));
    }

    let domain_open = compiled(&DOMAIN_OPEN)?;
    let domain_break = compiled(&DOMAIN_BREAK)?;

    let mut entry = String::new();
    for (idx, item) in items.into_iter().enumerate() {
        let cleaned = strip(&clean(item))?;
        let cleaned = domain_open.replace_all(&cleaned, "${2}\n[");
        let cleaned = domain_break.replace_all(&cleaned, "\n[");

        if idx == 0 {
            entry.push_str(&format!("1. {cleaned}\n"));
        } else {
            entry.push_str(&format!("\n{}. {cleaned}\n", idx + 1));
        }
    }
    Ok(entry)
}

impl DefinitionParser for LarousseBilingualParser {
    fn name(&self) -> &str {
        "Larousse (bilingual)"
    }

    fn parse(&self, html: &str, _word: &str) -> Result<Definition, ParseError> {
        let doc = document(html)?;
        let Some(article) = doc.select(compiled(&ARTICLE)?).next() else {
            return Ok(Definition::NotFound);
        };

        let headers = article
            .select(compiled(&HEADER_ZONE)?)
            .map(header)
            .collect::<Result<Vec<_>, _>>()?;
        let texts = article
            .select(compiled(&TEXT_ZONE)?)
            .map(definitions)
            .collect::<Result<Vec<_>, _>>()?;

        if headers.len() != texts.len() {
            tracing::debug!(
                "Larousse zone count mismatch: {} headers, {} definitions",
                headers.len(),
                texts.len()
            );
        }

        // Pair positionally, the shorter side is padded with empty blocks
        let mut parsed = String::new();
        for i in 0..headers.len().max(texts.len()) {
            parsed.push_str(headers.get(i).map(String::as_str).unwrap_or_default());
            parsed.push_str(texts.get(i).map(String::as_str).unwrap_or_default());
        }

        Ok(Definition::from_text(finish(&parsed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(html: &str) -> Definition {
        LarousseBilingualParser.parse(html, "maison").unwrap()
    }

    #[test]
    fn test_numbered_items_under_header() {
        let html = r#"<html><body><div id="BlocArticle">
            <div class="ZoneEntree"><h1>maison</h1> <span>nom féminin</span> Conjugaison</div>
            <div class="ZoneTexte">
              <div class="itemZONESEM">house</div>
              <div class="itemZONESEM">[ARCHITECTURE - building] home</div>
            </div>
        </div></body></html>"#;

        assert_eq!(
            parse(html),
            Definition::Found(
                "maison nom féminin\n\n1. house\n\n2. ARCHITECTURE\n[building] home".to_string()
            )
        );
    }

    #[test]
    fn test_zone_without_items_is_used_whole() {
        let html = r#"<div id="BlocArticle">
            <div class="ZoneEntree">run</div>
            <div class="ZoneTexte"> courir,   filer </div>
        </div>"#;

        assert_eq!(parse(html), Definition::Found("run\n\ncourir, filer".to_string()));
    }

    #[test]
    fn test_more_headers_than_definitions() {
        let html = r#"<div id="BlocArticle">
            <div class="ZoneEntree">first header</div>
            <div class="ZoneEntree">second header</div>
            <div class="ZoneTexte"><div class="itemZONESEM">the only definition</div></div>
        </div>"#;

        let Definition::Found(text) = parse(html) else {
            panic!("expected a definition");
        };

        let first = text.find("first header").unwrap();
        let definition = text.find("1. the only definition").unwrap();
        let second = text.find("second header").unwrap();
        assert!(first < definition && definition < second);
        // second header is paired with an empty block
        assert!(text.ends_with("second header"));
    }

    #[test]
    fn test_more_definitions_than_headers() {
        let html = r#"<div id="BlocArticle">
            <div class="ZoneEntree">header</div>
            <div class="ZoneTexte">one</div>
            <div class="ZoneTexte">two</div>
            <div class="ZoneTexte">three</div>
        </div>"#;

        assert_eq!(
            parse(html),
            Definition::Found("header\n\none\ntwo\nthree".to_string())
        );
    }

    #[test]
    fn test_missing_article_is_not_found() {
        assert_eq!(
            parse("<html><body><p>Aucun résultat</p></body></html>"),
            Definition::NotFound
        );
    }
}
