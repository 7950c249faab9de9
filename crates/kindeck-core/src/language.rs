use kindeck_config::highlight::HighlightConfig;
use kindeck_types::Language;

/// Optional trait for languages whose words inflect
pub trait Inflector: Send + Sync {
    /// Surface forms likely to share the word's root, the word itself first
    fn candidates(&self, word: &str) -> Vec<String>;
}

/// Suffix-table inflection: strip a known suffix, then re-attach every other one.
///
/// Irregular forms are out of reach. For English "run" the candidates are
/// "runs", "runed", "runer", "runing", "runly": "ran" and "running" (doubled
/// consonant) are never produced.
pub struct SuffixInflector {
    suffixes: Vec<String>,
}

impl SuffixInflector {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self {
            suffixes: suffixes
                .into_iter()
                .map(|s| s.to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    pub fn for_language(config: &HighlightConfig, lang: Language) -> Self {
        Self::new(config.suffixes_for(lang.code()).to_vec())
    }
}

impl Inflector for SuffixInflector {
    fn candidates(&self, word: &str) -> Vec<String> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Vec::new();
        }

        let mut candidates = vec![word.clone()];
        let mut has_suffix = false;

        for s1 in &self.suffixes {
            let Some(root) = word.strip_suffix(s1.as_str()) else {
                continue;
            };
            // A word that is only a suffix has no root to inflect
            if root.is_empty() {
                continue;
            }
            has_suffix = true;

            candidates.push(root.to_string());
            for s2 in self.suffixes.iter().filter(|s2| *s2 != s1) {
                candidates.push(format!("{root}{s2}"));
            }
        }

        if !has_suffix {
            for suffix in &self.suffixes {
                candidates.push(format!("{word}{suffix}"));
            }
        }

        let mut seen = std::collections::HashSet::new();
        candidates.retain(|c| seen.insert(c.clone()));
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> SuffixInflector {
        SuffixInflector::for_language(&HighlightConfig::default(), Language::En)
    }

    #[test]
    fn test_word_with_suffix_generates_sibling_forms() {
        assert_eq!(
            english().candidates("running"),
            vec!["running", "runn", "runns", "runned", "runner", "runnly"]
        );
    }

    #[test]
    fn test_word_without_suffix_gets_speculative_forms() {
        let candidates = english().candidates("Run");
        assert_eq!(
            candidates,
            vec!["run", "runs", "runed", "runer", "runing", "runly"]
        );
        // irregular past tense is a known gap
        assert!(!candidates.contains(&"ran".to_string()));
    }

    #[test]
    fn test_multiple_matching_suffixes_share_candidates() {
        let french = SuffixInflector::for_language(&HighlightConfig::default(), Language::Fr);
        let candidates = french.candidates("maisons");

        // both "s" and "ons" match
        assert!(candidates.contains(&"maison".to_string()));
        assert!(candidates.contains(&"mais".to_string()));
        assert_eq!(
            candidates.len(),
            candidates
                .iter()
                .collect::<std::collections::HashSet<_>>()
                .len()
        );
    }

    #[test]
    fn test_bare_suffix_word_has_no_root() {
        let candidates = english().candidates("s");
        assert_eq!(candidates[0], "s");
        assert!(!candidates.contains(&"ed".to_string()));
    }

    #[test]
    fn test_empty_table_only_yields_word() {
        assert_eq!(SuffixInflector::new(vec![]).candidates("Haus"), vec!["haus"]);
    }
}
