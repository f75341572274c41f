use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::currency::DEFAULT_CURRENCY;
use crate::errors::{FarmError, Result};
use crate::notebook::{validate_timestamp_format, DEFAULT_TIMESTAMP_FORMAT};

const DEFAULT_DIR_NAME: &str = ".farm_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

/// Environment variable that relocates the configuration directory.
pub const HOME_ENV: &str = "FARM_CORE_HOME";

/// User preferences. Session data (ledger entries, notes) is never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub note_timestamp_format: String,
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: DEFAULT_CURRENCY.into(),
            note_timestamp_format: DEFAULT_TIMESTAMP_FORMAT.into(),
            plain_mode: false,
            quiet_mode: false,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 4] =
        ["currency", "note_timestamp_format", "plain_mode", "quiet_mode"];

    /// Updates a single preference from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency" => self.currency = value.trim().to_string(),
            "note_timestamp_format" => {
                validate_timestamp_format(value)?;
                self.note_timestamp_format = value.to_string();
            }
            "plain_mode" => self.plain_mode = parse_flag(key, value)?,
            "quiet_mode" => self.quiet_mode = parse_flag(key, value)?,
            other => {
                return Err(FarmError::Config(format!(
                    "unknown key `{other}` (expected one of: {})",
                    Self::KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency.clone()),
            ("note_timestamp_format", self.note_timestamp_format.clone()),
            ("plain_mode", self.plain_mode.to_string()),
            ("quiet_mode", self.quiet_mode.to_string()),
        ]
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(FarmError::Config(format!(
            "`{key}` expects true or false, got `{value}`"
        ))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `$FARM_CORE_HOME`, falling back to `~/.farm_core`.
    pub fn new() -> Self {
        Self::with_base_dir(base_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Missing file means defaults.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        validate_timestamp_format(&config.note_timestamp_format)?;
        tracing::debug!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_file(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn base_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path());
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_preserves_preferences() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().join("nested"));
        let mut config = Config::default();
        config.set("currency", "USD").unwrap();
        config.set("plain_mode", "on").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "USD");
        assert!(loaded.plain_mode);
        assert!(!manager.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), r#"{ "quiet_mode": true }"#).unwrap();
        let config = ConfigManager::with_base_dir(dir.path()).load().unwrap();
        assert!(config.quiet_mode);
        assert_eq!(config.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn set_rejects_unknown_keys_and_bad_values() {
        let mut config = Config::default();
        assert!(config.set("theme", "dark").is_err());
        assert!(config.set("plain_mode", "maybe").is_err());
        assert!(config.set("note_timestamp_format", "%Q").is_err());
        assert_eq!(config, Config::default());
    }
}
