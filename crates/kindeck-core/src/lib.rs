pub mod error;
pub mod highlight;
pub mod language;
pub mod preprocess;

pub use error::KindeckError;
pub use highlight::Highlighter;
pub use language::{Inflector, SuffixInflector};
pub use preprocess::{DefaultPreprocessor, Preprocessor, htmlify};
