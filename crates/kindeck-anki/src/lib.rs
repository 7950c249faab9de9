mod assembly;
mod client;
mod deck;
mod packager;
mod template;

pub use assembly::DeckAssembler;
pub use client::AnkiConnectClient;
pub use deck::{Deck, deck_id};
pub use packager::{AnkiConnectPackager, DeckPackager, JsonDeckPackager, PackageReceipt};
pub use template::CardTemplate;
