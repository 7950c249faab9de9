use kindeck_types::Definition;

/// Turns one dictionary page into definition text.
///
/// Implementations are pure functions of `(html, word)`: a page without the
/// site's definition markers is `Definition::NotFound`, never an error.
pub trait DefinitionParser: Send + Sync {
    /// e.g. "Larousse (bilingual)"
    fn name(&self) -> &str;

    fn parse(&self, html: &str, word: &str) -> Result<Definition, ParseError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    #[error("Input is not HTML: {0}")]
    Malformed(String),

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
