use crate::catalog::Credentials;
use crate::error::{CompanionError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BASE_URL: &str = "https://gateway.marvel.com/v1/public";

pub const ENV_BASE_URL: &str = "BASE_URL";
pub const ENV_API_KEY: &str = "API_KEY";
pub const ENV_HASH: &str = "HASH";
pub const ENV_TS: &str = "TS";
pub const ENV_TIMEOUT: &str = "COMPANION_TIMEOUT_SECS";

/// Configuration for companion, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompanionConfig {
    /// Catalog API root, e.g. `https://gateway.marvel.com/v1/public`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub hash: String,

    #[serde(default)]
    pub ts: String,

    /// Request timeout for catalog lookups. Unset means wait forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            hash: String::new(),
            ts: String::new(),
            timeout_seconds: None,
        }
    }
}

impl CompanionConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(CompanionError::Io)?;
        let config: CompanionConfig =
            serde_json::from_str(&content).map_err(CompanionError::Serialization)?;
        Ok(config)
    }

    /// Write config to `<config_dir>/config.json`, creating the directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir).map_err(CompanionError::Io)?;

        let content = serde_json::to_string_pretty(self).map_err(CompanionError::Serialization)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content).map_err(CompanionError::Io)?;
        Ok(())
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup; empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(base_url) = get(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(api_key) = get(ENV_API_KEY) {
            self.api_key = api_key;
        }
        if let Some(hash) = get(ENV_HASH) {
            self.hash = hash;
        }
        if let Some(ts) = get(ENV_TS) {
            self.ts = ts;
        }
        if let Some(timeout) = get(ENV_TIMEOUT) {
            let seconds = timeout.trim().parse::<u64>().map_err(|_| {
                CompanionError::Config(format!("{} must be a number of seconds", ENV_TIMEOUT))
            })?;
            self.timeout_seconds = Some(seconds);
        }
        Ok(self)
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(&self.api_key, &self.hash, &self.ts)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    /// The API key with everything but the last four characters hidden.
    pub fn masked_api_key(&self) -> String {
        let chars: Vec<char> = self.api_key.chars().collect();
        if chars.len() <= 4 {
            return "*".repeat(chars.len());
        }
        let visible: String = chars[chars.len() - 4..].iter().collect();
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CompanionConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = CompanionConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, CompanionConfig::default());
    }

    #[test]
    fn test_load_partial_config_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"api_key": "public-key", "timeout_seconds": 10}"#,
        )
        .unwrap();

        let loaded = CompanionConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.api_key, "public-key");
        assert_eq!(loaded.timeout(), Some(Duration::from_secs(10)));
        assert_eq!(loaded.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested").join("companion");

        let config = CompanionConfig {
            api_key: "public-key".into(),
            timeout_seconds: Some(10),
            ..CompanionConfig::default()
        };
        config.save(&dir).unwrap();

        assert_eq!(CompanionConfig::load(&dir).unwrap(), config);
    }

    #[test]
    fn test_load_malformed_config_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();

        let err = CompanionConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CompanionError::Serialization(_)));
    }

    #[test]
    fn test_env_overrides_win_over_file_values() {
        let config = CompanionConfig {
            api_key: "from-file".into(),
            hash: "file-hash".into(),
            ..CompanionConfig::default()
        };
        let config = config
            .with_overrides(lookup(&[
                (ENV_API_KEY, "from-env"),
                (ENV_HASH, ""),
                (ENV_TS, "1"),
                (ENV_BASE_URL, "http://localhost:8080/v1/public"),
            ]))
            .unwrap();

        assert_eq!(config.api_key, "from-env");
        assert_eq!(config.hash, "file-hash");
        assert_eq!(config.ts, "1");
        assert_eq!(config.base_url, "http://localhost:8080/v1/public");
        assert_eq!(config.credentials(), Credentials::new("from-env", "file-hash", "1"));
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = CompanionConfig::default()
            .with_overrides(lookup(&[(ENV_TIMEOUT, "soon")]))
            .unwrap_err();
        assert!(matches!(err, CompanionError::Config(_)));

        let config = CompanionConfig::default()
            .with_overrides(lookup(&[(ENV_TIMEOUT, "5")]))
            .unwrap();
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_masked_api_key() {
        let mut config = CompanionConfig::default();
        assert_eq!(config.masked_api_key(), "");
        config.api_key = "abc".into();
        assert_eq!(config.masked_api_key(), "***");
        config.api_key = "0123456789".into();
        assert_eq!(config.masked_api_key(), "******6789");
    }
}
