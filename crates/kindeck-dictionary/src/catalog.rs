use std::collections::BTreeMap;

use kindeck_core::KindeckError;
use kindeck_types::{DictionarySource, Language, ParserKind, RedirectRule, SourceId};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate dictionary id {id} for language {lang}")]
    Duplicate { lang: Language, id: SourceId },

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Source {lang}/{id} points at '{host}', which {parser:?} cannot read")]
    HostMismatch {
        lang: Language,
        id: SourceId,
        host: String,
        parser: ParserKind,
    },
}

/// Read-only registry of dictionary sources, grouped by source language.
///
/// Within a language, sources keep registration order; the first one is the
/// preferred default.
#[derive(Debug, Clone)]
pub struct Catalog {
    sources: BTreeMap<Language, Vec<DictionarySource>>,
}

impl Catalog {
    /// Every dictionary that ships with kindeck
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_sources(builtin_sources())
    }

    /// Validates ids, base URLs and parser hosts once, up front
    pub fn from_sources(
        entries: impl IntoIterator<Item = DictionarySource>,
    ) -> Result<Self, CatalogError> {
        let mut sources: BTreeMap<Language, Vec<DictionarySource>> = BTreeMap::new();

        for source in entries {
            let url = Url::parse(&source.base_url).map_err(|e| CatalogError::InvalidBaseUrl {
                url: source.base_url.clone(),
                source: e,
            })?;
            let host = url.host_str().unwrap_or_default();
            if !host.contains(source.parser.expected_host()) {
                return Err(CatalogError::HostMismatch {
                    lang: source.src_lang,
                    id: source.id,
                    host: host.to_string(),
                    parser: source.parser,
                });
            }

            let group = sources.entry(source.src_lang).or_default();
            if group.iter().any(|s| s.id == source.id) {
                return Err(CatalogError::Duplicate {
                    lang: source.src_lang,
                    id: source.id,
                });
            }
            group.push(source);
        }

        Ok(Self { sources })
    }

    /// Sources for a language code such as "en", in registration order
    pub fn list_sources(&self, code: &str) -> Result<&[DictionarySource], KindeckError> {
        let lang: Language = code.parse()?;
        let sources = self.sources(lang);
        if sources.is_empty() {
            return Err(KindeckError::UnsupportedLanguage(
                kindeck_types::UnsupportedLanguageError(code.to_string()),
            ));
        }

        Ok(sources)
    }

    pub fn sources(&self, lang: Language) -> &[DictionarySource] {
        self.sources.get(&lang).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn find(&self, lang: Language, id: SourceId) -> Result<&DictionarySource, KindeckError> {
        self.sources(lang)
            .iter()
            .find(|s| s.id == id)
            .ok_or(KindeckError::UnknownSource { lang, id })
    }

    pub fn iter(&self) -> impl Iterator<Item = &DictionarySource> {
        self.sources.values().flatten()
    }
}

fn source(
    id: SourceId,
    (src_lang, dst_lang): (Language, Language),
    name: &str,
    base_url: &str,
    referer: &str,
    parser: ParserKind,
) -> DictionarySource {
    let (url_suffix, redirect) = match parser {
        ParserKind::Linguee => (".html", RedirectRule::None),
        ParserKind::LarousseBilingual
        | ParserKind::LarousseEnglishGerman
        | ParserKind::LarousseEnglishSpanish
        | ParserKind::LarousseFrench => ("", RedirectRule::PenultimateSegment),
        _ => ("", RedirectRule::None),
    };
    let description = if src_lang == dst_lang {
        format!(
            "monolingual {}->{}",
            src_lang.code().to_uppercase(),
            dst_lang.code().to_uppercase()
        )
    } else {
        format!(
            "bi-lingual {}->{}",
            src_lang.code().to_uppercase(),
            dst_lang.code().to_uppercase()
        )
    };

    DictionarySource {
        id,
        src_lang,
        dst_lang,
        name: name.to_string(),
        description,
        base_url: base_url.to_string(),
        referer: referer.to_string(),
        url_suffix: url_suffix.to_string(),
        redirect,
        parser,
    }
}

fn linguee(id: SourceId, pair: (Language, Language)) -> DictionarySource {
    let url = format!(
        "https://www.linguee.com/{}-{}/translation/",
        pair.0.name().to_lowercase(),
        pair.1.name().to_lowercase()
    );
    source(
        id,
        pair,
        "Linguee",
        &url,
        "https://www.linguee.com",
        ParserKind::Linguee,
    )
}

fn builtin_sources() -> Vec<DictionarySource> {
    use Language::*;

    const LAROUSSE_FR: &str = "https://www.larousse.fr";
    const LAROUSSE_COM: &str = "https://www.larousse.com";

    let mut michaelis = source(
        1,
        (Pt, Pt),
        "Michaelis",
        "https://michaelis.uol.com.br/moderno-portugues/busca/portugues-brasileiro/",
        "https://michaelis.uol.com.br",
        ParserKind::Michaelis,
    );
    michaelis.description.push_str(" (Brazilian)");

    vec![
        source(
            1,
            (En, En),
            "Merriam-Webster",
            "https://www.merriam-webster.com/dictionary/",
            "https://www.merriam-webster.com",
            ParserKind::MerriamWebster,
        ),
        source(
            2,
            (En, De),
            "Larousse",
            "https://www.larousse.com/en/dictionaries/english-german/",
            LAROUSSE_COM,
            ParserKind::LarousseEnglishGerman,
        ),
        source(
            3,
            (En, Fr),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/anglais-francais/",
            LAROUSSE_FR,
            ParserKind::LarousseBilingual,
        ),
        source(
            4,
            (En, Es),
            "Larousse",
            "https://www.larousse.com/en/dictionaries/english-spanish/",
            LAROUSSE_COM,
            ParserKind::LarousseEnglishSpanish,
        ),
        linguee(5, (En, Fr)),
        linguee(6, (En, Es)),
        linguee(7, (En, Pt)),
        linguee(8, (En, De)),
        source(
            1,
            (Fr, Fr),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/francais/",
            LAROUSSE_FR,
            ParserKind::LarousseFrench,
        ),
        source(
            2,
            (Fr, En),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/francais-anglais/",
            LAROUSSE_FR,
            ParserKind::LarousseBilingual,
        ),
        source(
            3,
            (Fr, De),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/francais-allemand/",
            LAROUSSE_FR,
            ParserKind::LarousseBilingual,
        ),
        source(
            4,
            (Fr, Es),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/francais-espagnol/",
            LAROUSSE_FR,
            ParserKind::LarousseBilingual,
        ),
        linguee(5, (Fr, En)),
        linguee(6, (Fr, Es)),
        linguee(7, (Fr, Pt)),
        linguee(8, (Fr, De)),
        source(
            1,
            (Es, Es),
            "Real Academia Española",
            "https://dle.rae.es/",
            "https://dle.rae.es",
            ParserKind::Rae,
        ),
        source(
            2,
            (Es, Fr),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/espagnol-francais/",
            LAROUSSE_FR,
            ParserKind::LarousseBilingual,
        ),
        linguee(3, (Es, En)),
        linguee(4, (Es, Fr)),
        linguee(5, (Es, Pt)),
        linguee(6, (Es, De)),
        michaelis,
        linguee(2, (Pt, En)),
        linguee(3, (Pt, Fr)),
        linguee(4, (Pt, Es)),
        linguee(5, (Pt, De)),
        source(
            2,
            (De, Fr),
            "Larousse",
            "https://www.larousse.fr/dictionnaires/allemand-francais/",
            LAROUSSE_FR,
            ParserKind::LarousseBilingual,
        ),
        linguee(3, (De, En)),
        linguee(4, (De, Fr)),
        linguee(5, (De, Es)),
        linguee(6, (De, Pt)),
    ]
}
