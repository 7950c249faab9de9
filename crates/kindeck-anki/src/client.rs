use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// AnkiConnect protocol version spoken by this client
const API_VERSION: u32 = 6;

/// One note as AnkiConnect's `addNote` expects it
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note<'a> {
    pub deck_name: &'a str,
    pub model_name: &'a str,
    pub fields: NoteFields<'a>,
    pub tags: &'a [String],
}

/// Field names of Anki's stock "Basic" note type
#[derive(Debug, Clone, Serialize)]
pub struct NoteFields<'a> {
    #[serde(rename = "Front")]
    pub front: &'a str,
    #[serde(rename = "Back")]
    pub back: &'a str,
}

/// Talks to the AnkiConnect add-on of a running Anki desktop.
///
/// Every call is one `POST {action, version, params}`; AnkiConnect always
/// answers `{result, error}` with HTTP 200, so failures surface from `error`.
#[derive(Clone)]
pub struct AnkiConnectClient {
    base_url: String,
    client: reqwest::Client,
}

impl AnkiConnectClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Protocol version; the first call to fail when Anki is closed
    pub async fn version(&self) -> Result<u32> {
        self.call("version", json!({})).await
    }

    /// Note types known to the open collection
    pub async fn model_names(&self) -> Result<Vec<String>> {
        self.call("modelNames", json!({})).await
    }

    /// Anki id of `deck`, created when missing
    pub async fn create_deck(&self, deck: &str) -> Result<u64> {
        self.call("createDeck", json!({ "deck": deck })).await
    }

    /// Id of the new note. Duplicates of an existing note are refused.
    pub async fn add_note(&self, note: &Note<'_>) -> Result<u64> {
        let mut value = serde_json::to_value(note)?;
        value["options"] = json!({ "allowDuplicate": false });

        let params = json!({ "note": value });
        self.call("addNote", params).await
    }

    async fn call<T>(&self, action: &str, params: serde_json::Value) -> Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        let request = Request {
            action,
            version: API_VERSION,
            params,
        };

        let reply: Reply<T> = self
            .client
            .post(&self.base_url)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("AnkiConnect unreachable at {}", self.base_url))?
            .json()
            .await
            .with_context(|| format!("Unexpected AnkiConnect reply to '{action}'"))?;

        reply.into_result(action)
    }
}

#[derive(Serialize)]
struct Request<'a> {
    action: &'a str,
    version: u32,
    params: serde_json::Value,
}

#[derive(Deserialize)]
struct Reply<T> {
    result: Option<T>,
    error: Option<String>,
}

impl<T> Reply<T> {
    fn into_result(self, action: &str) -> Result<T> {
        match (self.error, self.result) {
            (Some(error), _) => anyhow::bail!("AnkiConnect '{action}' failed: {error}"),
            (None, Some(result)) => Ok(result),
            (None, None) => anyhow::bail!("AnkiConnect '{action}' returned nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins() {
        let reply: Reply<u64> =
            serde_json::from_str(r#"{"result": null, "error": "deck was not found"}"#).unwrap();
        let err = reply.into_result("addNote").unwrap_err();
        assert_eq!(
            err.to_string(),
            "AnkiConnect 'addNote' failed: deck was not found"
        );
    }

    #[test]
    fn test_null_result_is_an_error() {
        let reply: Reply<u64> = serde_json::from_str(r#"{"result": null, "error": null}"#).unwrap();
        assert!(reply.into_result("createDeck").is_err());
    }

    #[test]
    fn test_result_is_returned() {
        let reply: Reply<Vec<String>> =
            serde_json::from_str(r#"{"result": ["Basic", "Cloze"], "error": null}"#).unwrap();
        assert_eq!(reply.into_result("modelNames").unwrap(), vec!["Basic", "Cloze"]);
    }

    #[test]
    fn test_note_fields_use_anki_names() {
        let tags = vec!["kindeck".to_string()];
        let note = Note {
            deck_name: "Dune",
            model_name: "Basic",
            fields: NoteFields {
                front: "<b>spice</b>",
                back: "a drug",
            },
            tags: &tags,
        };

        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            json!({
                "deckName": "Dune",
                "modelName": "Basic",
                "fields": { "Front": "<b>spice</b>", "Back": "a drug" },
                "tags": ["kindeck"]
            })
        );
    }
}
