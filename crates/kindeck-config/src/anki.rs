use std::env;

use serde::{Deserialize, Serialize};

fn default_url() -> String {
    "http://localhost:8765".to_string()
}

fn default_model() -> String {
    "Basic".to_string()
}

fn default_tags() -> Vec<String> {
    vec!["kindeck".to_string()]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnkiConfig {
    /// AnkiConnect URL
    #[serde(default = "default_url")]
    pub url: String,
    /// Note type, must have `Front` and `Back` fields
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_tags")]
    pub tags: Vec<String>,
}

impl AnkiConfig {
    pub fn new() -> Self {
        let url = env::var("ANKI_CONNECT_URL").unwrap_or_else(|_| default_url());

        Self {
            url,
            ..Self::default()
        }
    }
}

impl Default for AnkiConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            tags: default_tags(),
        }
    }
}
