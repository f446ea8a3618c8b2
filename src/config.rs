use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, anyhow};

/// Endpoint of the hosted generator function
pub const DEFAULT_GENERATOR_URL: &str =
    "https://functions.poehali.dev/89d39509-bd44-4b24-b180-919b5c3062ed";

/// Overrides the generator endpoint from the config file
pub const GENERATOR_URL_ENV: &str = "POEHALI_GENERATOR_URL";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub generator_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    /// Load the config, falling back to defaults when the file is unreadable
    pub fn load_or_default() -> Self {
        match Self::get_config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(e) => {
                tracing::warn!(error = %e, "no config directory, using defaults");
                Self::new()
            }
        }
    }

    pub fn load_or_default_from(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "failed to load config, using defaults"
            );
            Self::new()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        Ok(())
    }

    /// Generator endpoint: env var first, then config file, then the default
    pub fn generator_endpoint(&self) -> String {
        let from_env = std::env::var(GENERATOR_URL_ENV).ok();
        self.resolve_endpoint(from_env.as_deref())
    }

    fn resolve_endpoint(&self, from_env: Option<&str>) -> String {
        from_env
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
            .or_else(|| self.generator_url.clone())
            .unwrap_or_else(|| DEFAULT_GENERATOR_URL.to_string())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;

        Ok(config_dir.join("poehali").join("config.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::new());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            generator_url: Some("http://localhost:8080/generate".to_string()),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"generator_url": 42}"#).unwrap();
        assert_eq!(Config::load_or_default_from(&path), Config::new());

        fs::write(&path, r#"{"generator_url": "http://localhost:8080"}"#).unwrap();
        assert_eq!(
            Config::load_or_default_from(&path).generator_url.as_deref(),
            Some("http://localhost:8080")
        );
    }

    #[test]
    fn test_endpoint_resolution_order() {
        let config = Config {
            generator_url: Some("http://from-config".to_string()),
        };
        assert_eq!(config.resolve_endpoint(Some("http://from-env")), "http://from-env");
        assert_eq!(config.resolve_endpoint(Some("  ")), "http://from-config");
        assert_eq!(config.resolve_endpoint(None), "http://from-config");
        assert_eq!(Config::new().resolve_endpoint(None), DEFAULT_GENERATOR_URL);
    }
}
