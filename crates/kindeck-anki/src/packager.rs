use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use kindeck_config::anki::AnkiConfig;
use serde::Serialize;

use crate::client::{AnkiConnectClient, Note, NoteFields};
use crate::deck::Deck;

/// Where a packaged deck ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReceipt {
    pub deck_id: u64,
    pub notes: usize,
    pub location: String,
}

/// Turns a finished deck into something Anki can import
#[async_trait]
pub trait DeckPackager: Send + Sync {
    async fn package(&self, deck: &Deck) -> Result<PackageReceipt>;
}

#[derive(Serialize)]
struct DeckFile<'a> {
    id: u64,
    name: &'a str,
    notes: Vec<NoteFile<'a>>,
}

#[derive(Serialize)]
struct NoteFile<'a> {
    front: &'a str,
    back: &'a str,
}

/// Writes `{id, name, notes: [{front, back}]}` for an external deck writer
pub struct JsonDeckPackager {
    path: PathBuf,
    pretty: bool,
}

impl JsonDeckPackager {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }
}

#[async_trait]
impl DeckPackager for JsonDeckPackager {
    async fn package(&self, deck: &Deck) -> Result<PackageReceipt> {
        let file = DeckFile {
            id: deck.id,
            name: &deck.name,
            notes: deck
                .cards
                .iter()
                .map(|card| NoteFile {
                    front: &card.front_html,
                    back: &card.back_html,
                })
                .collect(),
        };

        let json = if self.pretty {
            serde_json::to_vec_pretty(&file)?
        } else {
            serde_json::to_vec(&file)?
        };
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write deck to {}", self.path.display()))?;

        Ok(PackageReceipt {
            deck_id: deck.id,
            notes: deck.len(),
            location: self.path.display().to_string(),
        })
    }
}

/// Adds notes straight into a running Anki
pub struct AnkiConnectPackager {
    client: AnkiConnectClient,
    model: String,
    tags: Vec<String>,
}

impl AnkiConnectPackager {
    pub fn new(config: &AnkiConfig) -> Self {
        Self {
            client: AnkiConnectClient::new(config.url.clone()),
            model: config.model.clone(),
            tags: config.tags.clone(),
        }
    }
}

#[async_trait]
impl DeckPackager for AnkiConnectPackager {
    async fn package(&self, deck: &Deck) -> Result<PackageReceipt> {
        let version = self.client.version().await?;
        tracing::debug!("AnkiConnect version {}", version);

        let models = self.client.model_names().await?;
        if !models.contains(&self.model) {
            anyhow::bail!("Anki has no note type named '{}'", self.model);
        }

        let anki_id = self.client.create_deck(&deck.name).await?;

        let mut notes = 0;
        for card in &deck.cards {
            let note = Note {
                deck_name: &deck.name,
                model_name: &self.model,
                fields: NoteFields {
                    front: &card.front_html,
                    back: &card.back_html,
                },
                tags: &self.tags,
            };
            match self.client.add_note(&note).await {
                Ok(_) => notes += 1,
                Err(e) => tracing::warn!("Skipped a note in '{}': {:#}", deck.name, e),
            }
        }

        if notes == 0 && !deck.is_empty() {
            anyhow::bail!(
                "Anki accepted none of the {} notes for '{}'",
                deck.len(),
                deck.name
            );
        }

        Ok(PackageReceipt {
            deck_id: anki_id,
            notes,
            location: format!("anki:{}", deck.name),
        })
    }
}
