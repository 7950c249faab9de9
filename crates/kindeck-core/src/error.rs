use kindeck_types::{Language, SourceId, UnsupportedLanguageError};

/// Conditions that end a whole run. Per-word failures never surface here.
#[derive(Debug, thiserror::Error)]
pub enum KindeckError {
    #[error(transparent)]
    UnsupportedLanguage(#[from] UnsupportedLanguageError),

    #[error("No dictionary with id {id} for language {lang}")]
    UnknownSource { lang: Language, id: SourceId },

    #[error("No definitions found for any of the {words} words, try another dictionary")]
    EmptyDeck { words: usize },
}
