pub mod catalog;
mod html;
pub mod parsers;
pub mod registry;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use registry::{ParserRegistry, parser_for};
pub use types::{DefinitionParser, ParseError};
