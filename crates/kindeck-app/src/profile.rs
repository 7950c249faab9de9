use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use kindeck_config::Config;

/// A JSON profile when given, environment and defaults otherwise
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::new());
    };

    let file = File::open(path)
        .with_context(|| format!("Failed to open config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_profile_overrides_only_given_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "anki": {{ "model": "Basic (and reversed card)" }} }}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.anki.model, "Basic (and reversed card)");
        assert_eq!(config.anki.tags, vec!["kindeck"]);
        assert_eq!(config.network.max_retries, 3);
    }

    #[test]
    fn test_missing_profile_names_the_path() {
        let err = load_config(Some(Path::new("/nonexistent/kindeck.json"))).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/kindeck.json"));
    }
}
