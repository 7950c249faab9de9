mod encoding;
mod error;
mod redirect;
mod session;

pub use encoding::detect_encoding;
pub use error::FetchError;
pub use redirect::redirect_title;
pub use session::{RetrievalResult, RetrievalSession, Retriever};
