use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::modules::bubble::MIN_BUBBLE_WIDTH;
use crate::modules::catalog::{lookup, CatalogError, Category};

pub const CONFIG_FILE: &str = "neko_config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid default key: {0}")]
    InvalidDefault(#[from] CatalogError),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Keys used when a caller omits one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultKeys {
    pub mood: String,
    pub face: String,
    pub kitten: String,
    pub pose: String,
    pub action: String,
    pub parade_count: i64,
}

impl DefaultKeys {
    pub fn new() -> Self {
        Self {
            mood: "standard".to_string(),
            face: "standard".to_string(),
            kitten: "standard".to_string(),
            pose: "sitting".to_string(),
            action: "sleeping".to_string(),
            parade_count: 3,
        }
    }

    pub fn for_category(&self, category: Category) -> &str {
        match category {
            Category::Standard => &self.mood,
            Category::Face => &self.face,
            Category::Kitten => &self.kitten,
            Category::BigCat => &self.pose,
            Category::Action => &self.action,
        }
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for category in Category::ALL {
            let key = self.for_category(category);
            lookup(category, Some(key), key)?;
        }
        Ok(())
    }
}

impl Default for DefaultKeys {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    pub min_width: usize,
}

impl BubbleConfig {
    pub fn new(min_width: usize) -> Self {
        Self { min_width }
    }
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self::new(MIN_BUBBLE_WIDTH)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NekoConfig {
    pub defaults: DefaultKeys,
    pub bubble: BubbleConfig,
}

impl NekoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: NekoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading neko config");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.defaults.validate()?;

        if self.bubble.min_width == 0 {
            return Err(ConfigError::InvalidValue(
                "bubble.min_width must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
