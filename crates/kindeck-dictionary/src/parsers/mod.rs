//! One parser per site template. `larousse` and `linguee` serve every
//! source built on the shared bilingual templates of those sites.

pub mod larousse;
pub mod larousse_en;
pub mod larousse_fr;
pub mod linguee;
pub mod merriam_webster;
pub mod michaelis;
pub mod rae;

pub use larousse::LarousseBilingualParser;
pub use larousse_en::{LarousseEnglishGermanParser, LarousseEnglishSpanishParser};
pub use larousse_fr::LarousseFrenchParser;
pub use linguee::LingueeParser;
pub use merriam_webster::MerriamWebsterParser;
pub use michaelis::MichaelisParser;
pub use rae::RaeParser;
