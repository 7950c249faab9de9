use std::collections::HashMap;

use kindeck_core::KindeckError;
use kindeck_types::{Definition, Language, ParserKind, SourceId};

use crate::catalog::Catalog;
use crate::parsers::{
    LarousseBilingualParser, LarousseEnglishGermanParser, LarousseEnglishSpanishParser,
    LarousseFrenchParser, LingueeParser, MerriamWebsterParser, MichaelisParser, RaeParser,
};
use crate::types::{DefinitionParser, ParseError};

pub fn parser_for(kind: ParserKind) -> &'static dyn DefinitionParser {
    match kind {
        ParserKind::LarousseBilingual => &LarousseBilingualParser,
        ParserKind::Linguee => &LingueeParser,
        ParserKind::MerriamWebster => &MerriamWebsterParser,
        ParserKind::LarousseEnglishGerman => &LarousseEnglishGermanParser,
        ParserKind::LarousseEnglishSpanish => &LarousseEnglishSpanishParser,
        ParserKind::LarousseFrench => &LarousseFrenchParser,
        ParserKind::Rae => &RaeParser,
        ParserKind::Michaelis => &MichaelisParser,
    }
}

/// `(language, source id)` → parser, resolved once from a validated catalog
pub struct ParserRegistry {
    parsers: HashMap<(Language, SourceId), &'static dyn DefinitionParser>,
}

impl ParserRegistry {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        let parsers = catalog
            .iter()
            .map(|source| (source.identity(), parser_for(source.parser)))
            .collect();

        Self { parsers }
    }

    pub fn resolve(
        &self,
        (lang, id): (Language, SourceId),
    ) -> Result<&'static dyn DefinitionParser, KindeckError> {
        self.parsers
            .get(&(lang, id))
            .copied()
            .ok_or(KindeckError::UnknownSource { lang, id })
    }

    pub fn parse(
        &self,
        identity: (Language, SourceId),
        html: &str,
        word: &str,
    ) -> Result<Result<Definition, ParseError>, KindeckError> {
        Ok(self.resolve(identity)?.parse(html, word))
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}
