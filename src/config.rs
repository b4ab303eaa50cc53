//! Configuration for the pledge portal.
//!
//! Settings are layered (later sources override earlier):
//! 1. Built-in defaults
//! 2. An optional `pledges.toml` file in the working directory
//! 3. Environment variables prefixed with `PLEDGES_` (nested keys separated
//!    by `__`, e.g. `PLEDGES_SERVER__PORT=9000`)

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub assets: AssetConfig,
    pub card: CardConfig,
    pub sheets: SheetsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Read-only filesystem collaborators. Both paths are relative to the
/// working directory by default and are re-read on every request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Background template the card is composited onto.
    pub template_path: PathBuf,
    /// TrueType font used for both text draws. A missing or unreadable
    /// font degrades to the bundled fallback instead of failing.
    pub font_path: PathBuf,
}

/// Text placement on the card: offsets, sizes, and colors keyed by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    pub name: TextStyle,
    pub amount: TextStyle,
    /// Label appended after the amount, e.g. `50000 UGX`.
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub x: i32,
    pub y: i32,
    pub size: f32,
    /// `#RRGGBB`
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Spreadsheet to append pledge rows to. Empty disables the ledger.
    pub spreadsheet_id: String,
    /// Range the append call targets.
    pub range: String,
    /// Service-account JSON file, used when `GOOGLE_CREDS` is not set.
    pub credentials_path: PathBuf,
    /// Sheets API base URL.
    pub api_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("static/card_template.png"),
            font_path: PathBuf::from("assets/fonts/DejaVuSans.ttf"),
        }
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            name: TextStyle {
                x: 575,
                y: 310,
                size: 45.0,
                color: "#6A5ACD".to_string(),
            },
            amount: TextStyle {
                x: 570,
                y: 750,
                size: 60.0,
                color: "#9370DB".to_string(),
            },
            currency: "UGX".to_string(),
        }
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            spreadsheet_id: String::new(),
            range: "Sheet1!A1".to_string(),
            credentials_path: PathBuf::from("creds.json"),
            api_base: "https://sheets.googleapis.com".to_string(),
        }
    }
}

impl TextStyle {
    /// Parse the configured `#RRGGBB` color.
    pub fn rgb(&self) -> Option<[u8; 3]> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some([r, g, b])
    }
}

impl AppConfig {
    /// Load configuration from defaults, the optional config file, and the
    /// environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("pledges")
    }

    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let loader = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("PLEDGES").separator("__"))
            .build()?;

        let config: AppConfig = loader.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, style) in [("name", &self.card.name), ("amount", &self.card.amount)] {
            if style.rgb().is_none() {
                return Err(ConfigError::Validation {
                    message: format!(
                        "card.{field}.color '{}' is not a #RRGGBB color",
                        style.color
                    ),
                });
            }
            if style.size <= 0.0 {
                return Err(ConfigError::Validation {
                    message: format!("card.{field}.size must be positive"),
                });
            }
        }

        if self.sheets.range.is_empty() {
            return Err(ConfigError::Validation {
                message: "sheets.range must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
