use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

fn default_suffixes() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 5] = [
        ("en", &["s", "ed", "er", "ing", "ly"]),
        (
            "fr",
            &[
                "s", "e", "es", "er", "eur", "euse", "aux", "il", "ille", "eux", "x", "t", "te",
                "ent", "is", "it", "ons", "ont", "ment",
            ],
        ),
        (
            "es",
            &[
                "s", "o", "a", "os", "as", "ir", "er", "ar", "í", "ó", "é", "aron", "se", "ieron",
                "amos", "imos", "emos", "eis", "ais", "mente", "aba",
            ],
        ),
        (
            "pt",
            &[
                "s", "ir", "er", "ar", "a", "o", "al", "este", "amos", "emos", "imos", "ou", "ei",
                "i", "ão", "ões", "aste", "aram", "eram", "mente", "ava",
            ],
        ),
        (
            "de",
            &["e", "st", "er", "s", "t", "d", "en", "ig", "lich", "ung", "keit"],
        ),
    ];

    table
        .into_iter()
        .map(|(lang, suffixes)| {
            (
                lang.to_string(),
                suffixes.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect()
}

fn default_redaction() -> String {
    "(...)".to_string()
}

/// Data driving the morphological highlighter
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Ordered inflectional suffixes per ISO 639-1 code
    #[serde(default = "default_suffixes")]
    pub suffixes: BTreeMap<String, Vec<String>>,
    /// Shown instead of the word on orientation B cards
    #[serde(default = "default_redaction")]
    pub redaction: String,
}

impl HighlightConfig {
    /// Empty for languages without a table
    pub fn suffixes_for(&self, lang: &str) -> &[String] {
        self.suffixes.get(lang).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            suffixes: default_suffixes(),
            redaction: default_redaction(),
        }
    }
}
