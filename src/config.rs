use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
struct ConfigFile {
    api: ApiConfig,
    horoscope: HoroscopeConfig,
    storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
struct ApiConfig {
    key: String,
    url: String,
    model: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HoroscopeConfig {
    api_key: String,
    url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct StorageConfig {
    data_dir: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub horoscope_api_key: String,
    pub horoscope_url: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config_file: ConfigFile =
            toml::from_str(&content).context("Failed to parse config file")?;

        Ok(Self {
            api_key: config_file.api.key,
            api_url: config_file.api.url,
            model: config_file.api.model,
            horoscope_api_key: config_file.horoscope.api_key,
            horoscope_url: config_file.horoscope.url,
            data_dir: config_file.storage.data_dir.into(),
        })
    }

    pub fn load() -> Result<Self> {
        Self::from_file("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let raw = r#"
            [api]
            key = "k"
            url = "https://generativelanguage.googleapis.com/v1beta"
            model = "gemini-2.5-flash"

            [horoscope]
            api_key = "h"
            url = "https://api.api-ninjas.com/v1/horoscope"

            [storage]
            data_dir = "data"
        "#;
        let file: ConfigFile = toml::from_str(raw).unwrap();
        assert_eq!(file.api.model, "gemini-2.5-flash");
        assert_eq!(file.storage.data_dir, "data");
    }
}
