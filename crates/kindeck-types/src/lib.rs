pub mod language;
pub mod source;
pub mod types;

pub use language::{Language, UnsupportedLanguageError};
pub use source::{DictionarySource, ParserKind, RedirectRule, SourceId};
pub use types::{
    Card, CardOrientation, Definition, InvalidOrientationError, LookupWord, ParsedDefinition,
};
