use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use kindeck_types::LookupWord;
use serde::Deserialize;

/// One entry of the vocabulary export
#[derive(Debug, Deserialize)]
struct RawWord {
    word: String,
    #[serde(default)]
    usage: String,
}

pub fn read_words(path: &Path) -> anyhow::Result<Vec<LookupWord>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    parse_words(&data).with_context(|| format!("Invalid word list {}", path.display()))
}

/// Order kept; a repeated word keeps its first usage passage
pub fn parse_words(data: &str) -> anyhow::Result<Vec<LookupWord>> {
    let raw: Vec<RawWord> = serde_json::from_str(data)?;

    let mut seen = HashSet::new();
    let mut words = Vec::with_capacity(raw.len());
    for entry in raw {
        let word = entry.word.trim();
        if word.is_empty() {
            tracing::warn!("Skipping entry with an empty word");
            continue;
        }
        if !seen.insert(word.to_string()) {
            tracing::debug!("Skipping repeated word '{}'", word);
            continue;
        }

        words.push(LookupWord::from_raw_usage(word, &entry.usage));
    }

    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_occurrence_wins() {
        let words = parse_words(
            r#"[
                {"word": "spice", "usage": "The spice must flow."},
                {"word": "sand", "usage": "Deep sand."},
                {"word": "spice", "usage": "More spice."}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            words,
            vec![
                LookupWord::new("spice", "The <b>spice</b> must flow."),
                LookupWord::new("sand", "Deep <b>sand</b>."),
            ]
        );
    }

    #[test]
    fn test_blank_words_are_dropped() {
        let words = parse_words(r#"[{"word": "  ", "usage": "x"}, {"word": "dune"}]"#).unwrap();
        assert_eq!(words, vec![LookupWord::new("dune", "")]);
    }

    #[test]
    fn test_not_an_array_is_rejected() {
        assert!(parse_words(r#"{"word": "dune"}"#).is_err());
    }
}
