use serde::{Deserialize, Serialize};

use crate::language::Language;

/// `id` is only unique within one source language
pub type SourceId = u32;

/// One online dictionary configured for a language pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionarySource {
    pub id: SourceId,
    pub src_lang: Language,
    pub dst_lang: Language,
    pub name: String,
    pub description: String,
    /// Lookup URL stem, the lowercased word is appended to it
    pub base_url: String,
    pub referer: String,
    /// Appended after the word, e.g. ".html"
    #[serde(default)]
    pub url_suffix: String,
    #[serde(default)]
    pub redirect: RedirectRule,
    pub parser: ParserKind,
}

impl DictionarySource {
    pub fn identity(&self) -> (Language, SourceId) {
        (self.src_lang, self.id)
    }

    pub fn lookup_url(&self, word: &str) -> String {
        format!("{}{}{}", self.base_url, word.to_lowercase(), self.url_suffix)
    }

    /// `<id>::<name>::<description>`
    pub fn menu_label(&self) -> String {
        format!("{}::{}::{}", self.id, self.name, self.description)
    }
}

/// How a site reports the headword it redirected a lookup to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectRule {
    /// Final URL never names a different headword
    #[default]
    None,
    /// `.../<lemma>/<entry id>`
    PenultimateSegment,
}

/// Closed set of definition parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParserKind {
    /// Shared Larousse bilingual template (header/definition zones)
    LarousseBilingual,
    /// Shared Linguee template (translations with examples)
    Linguee,
    MerriamWebster,
    LarousseEnglishGerman,
    LarousseEnglishSpanish,
    LarousseFrench,
    Rae,
    Michaelis,
}

impl ParserKind {
    pub const ALL: [ParserKind; 8] = [
        ParserKind::LarousseBilingual,
        ParserKind::Linguee,
        ParserKind::MerriamWebster,
        ParserKind::LarousseEnglishGerman,
        ParserKind::LarousseEnglishSpanish,
        ParserKind::LarousseFrench,
        ParserKind::Rae,
        ParserKind::Michaelis,
    ];

    /// Host fragment a source must carry to be served by this parser
    pub fn expected_host(self) -> &'static str {
        match self {
            ParserKind::LarousseBilingual
            | ParserKind::LarousseEnglishGerman
            | ParserKind::LarousseEnglishSpanish
            | ParserKind::LarousseFrench => "larousse",
            ParserKind::Linguee => "linguee",
            ParserKind::MerriamWebster => "merriam-webster",
            ParserKind::Rae => "rae.es",
            ParserKind::Michaelis => "michaelis",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linguee() -> DictionarySource {
        DictionarySource {
            id: 5,
            src_lang: Language::En,
            dst_lang: Language::Fr,
            name: "Linguee".to_string(),
            description: "bi-lingual EN->FR".to_string(),
            base_url: "https://www.linguee.com/english-french/translation/".to_string(),
            referer: "https://www.linguee.com".to_string(),
            url_suffix: ".html".to_string(),
            redirect: RedirectRule::None,
            parser: ParserKind::Linguee,
        }
    }

    #[test]
    fn test_lookup_url_lowercases_and_appends_suffix() {
        assert_eq!(
            linguee().lookup_url("House"),
            "https://www.linguee.com/english-french/translation/house.html"
        );
    }

    #[test]
    fn test_menu_label() {
        assert_eq!(linguee().menu_label(), "5::Linguee::bi-lingual EN->FR");
    }
}
