use mixspace_engine::{CharTables, Tokenizer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid character tables in {config_path}: {reason}")]
    InvalidTables { config_path: PathBuf, reason: String },
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tables: CharTables,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        validate(&config.tables).map_err(|reason| ConfigError::InvalidTables {
            config_path: config_path.to_path_buf(),
            reason,
        })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/mixspace");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// A tokenizer using these tables and the default classifier.
    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::with_tables(self.tables.clone())
    }
}

/// Rejects tables the tokenizer cannot route unambiguously.
fn validate(tables: &CharTables) -> Result<(), String> {
    let roles: [(&str, &[char]); 5] = [
        ("left bracket", &tables.left_brackets),
        ("right bracket", &tables.right_brackets),
        ("left quote", &tables.left_quotes),
        ("right quote", &tables.right_quotes),
        ("neutral quote", &tables.neutral_quotes),
    ];
    for (i, (a_name, a)) in roles.iter().enumerate() {
        for (b_name, b) in &roles[i + 1..] {
            if let Some(c) = a.iter().find(|c| b.contains(*c)) {
                return Err(format!("{c:?} is both a {a_name} and a {b_name}"));
            }
        }
    }

    for pair in &tables.shorthand {
        if !tables.is_quote(pair.quote) {
            return Err(format!(
                "shorthand {:?} pairs with {:?}, which is not a quote",
                pair.mark, pair.quote
            ));
        }
    }
    Ok(())
}
