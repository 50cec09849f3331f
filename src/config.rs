use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub document: DocumentConfig,
    pub font: FontConfig,
    pub code: CodeConfig,
    pub headings: HeadingsConfig,
    pub rule: RuleConfig,
    pub tables: TablesConfig,
}

/// Core document properties.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,
    pub author: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: "Computation Offloading DQN Report".to_string(),
            author: String::new(),
        }
    }
}

/// Font of the `Normal` style. Size is in points.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub name: String,
    pub size: u32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            name: "Calibri".to_string(),
            size: 11,
        }
    }
}

/// Fixed-width font used for fenced code blocks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CodeConfig {
    pub font: String,
    pub size: u32,
}

impl Default for CodeConfig {
    fn default() -> Self {
        Self {
            font: "Courier New".to_string(),
            size: 9,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeadingsConfig {
    /// Level-1 heading texts rendered centered.
    pub centered: Vec<String>,
}

impl Default for HeadingsConfig {
    fn default() -> Self {
        Self {
            centered: vec!["Project Report".to_string()],
        }
    }
}

impl HeadingsConfig {
    pub fn is_centered(&self, text: &str) -> bool {
        self.centered.iter().any(|c| c == text)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub width: usize,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self { width: 80 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TablesConfig {
    pub style: String,
}

impl Default for TablesConfig {
    fn default() -> Self {
        Self {
            style: "Light Grid Accent 1".to_string(),
        }
    }
}

impl Config {
    /// The defaults shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        // Validated by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::compiled_default());
        }

        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a TOML document. Sections and keys left out keep their defaults.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
