use chrono::{DateTime, SecondsFormat, Utc};
use kindeck_types::Card;
use sha2::{Digest, Sha256};

/// Finished cards in input order, ready for a packager
#[derive(Debug, Clone)]
pub struct Deck {
    pub id: u64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self::with_timestamp(name, cards, Utc::now())
    }

    pub fn with_timestamp(
        name: impl Into<String>,
        cards: Vec<Card>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let name = name.into();
        Self {
            id: deck_id(&name, created_at),
            name,
            created_at,
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Top 52 bits of SHA-256("kindeck" + name + RFC 3339 timestamp).
///
/// Differs between runs that reuse a deck name; fits in a JSON number.
pub fn deck_id(name: &str, created_at: DateTime<Utc>) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(b"kindeck");
    hasher.update(name.as_bytes());
    hasher.update(created_at.to_rfc3339_opts(SecondsFormat::Nanos, true).as_bytes());
    let digest = hasher.finalize();

    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head) >> 12
}
