use crate::error::{FlipwiseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::Level;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DECK_FILE: &str = "flashcards.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Configuration for flipwise, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlipwiseConfig {
    /// Path offered by the save and load prompts
    pub deck_file: String,

    /// Load `deck_file` when a session starts, if it exists
    pub load_on_start: bool,

    /// Most verbose log level written to stderr
    pub log_level: String,
}

impl Default for FlipwiseConfig {
    fn default() -> Self {
        Self {
            deck_file: DEFAULT_DECK_FILE.to_string(),
            load_on_start: false,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl FlipwiseConfig {
    pub const KEYS: [&'static str; 3] = ["deck-file", "load-on-start", "log-level"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FlipwiseError::Io)?;
        let config: FlipwiseConfig =
            serde_json::from_str(&content).map_err(FlipwiseError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FlipwiseError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FlipwiseError::Serialization)?;
        fs::write(config_path, content).map_err(FlipwiseError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "deck-file" => Some(self.deck_file.clone()),
            "load-on-start" => Some(self.load_on_start.to_string()),
            "log-level" => Some(self.log_level.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "deck-file" => {
                if value.is_empty() {
                    return Err(FlipwiseError::Config("deck-file cannot be empty".into()));
                }
                self.deck_file = value.to_string();
            }
            "load-on-start" => {
                self.load_on_start = value.parse().map_err(|_| {
                    FlipwiseError::Config(format!(
                        "load-on-start expects true or false, got {}",
                        value
                    ))
                })?;
            }
            "log-level" => {
                value.parse::<Level>().map_err(|_| {
                    FlipwiseError::Config(format!(
                        "log-level expects trace, debug, info, warn or error, got {}",
                        value
                    ))
                })?;
                self.log_level = value.to_lowercase();
            }
            _ => return Err(FlipwiseError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// The configured log level, falling back to `warn` when unparseable.
    pub fn level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::WARN)
    }
}
