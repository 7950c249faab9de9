use std::env;

use serde::{Deserialize, Serialize};

use self::anki::AnkiConfig;
use self::highlight::HighlightConfig;
use self::network::NetworkConfig;
use self::output::OutputConfig;

pub mod anki;
pub mod highlight;
pub mod network;
pub mod output;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    pub highlight: HighlightConfig,
    pub anki: AnkiConfig,
    pub output: OutputConfig,
    /// Fallback filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    pub fn new() -> Self {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| default_log_level());

        Config {
            network: NetworkConfig::new(),
            highlight: HighlightConfig::default(),
            anki: AnkiConfig::new(),
            output: OutputConfig::default(),
            log_level,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            highlight: HighlightConfig::default(),
            anki: AnkiConfig::default(),
            output: OutputConfig::default(),
            log_level: default_log_level(),
        }
    }
}
