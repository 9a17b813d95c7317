//! # Configuration
//!
//! Settings live in `config.json` next to the record slots in the data directory.
//! A missing file means defaults; unknown fields in the file are ignored so an
//! older binary can still read a newer file.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `storage-key` | `pins` | Slot holding the record collection |
//! | `identifier-label` | `PIN` | Label in front of the identifier when sharing |
//! | `email-subject` | `My PIN` | Subject line of shared emails |
//! | `confirm-delete` | `true` | Ask before `pinbook delete` removes records |
//!
//! ## CLI Usage
//!
//! - `pinbook config`: show all values.
//! - `pinbook config <key>`: show one value.
//! - `pinbook config <key> <value>`: set a value.

use crate::error::{PinbookError, Result};
use crate::share::DEFAULT_LABEL;
use crate::store::backend::validate_slot_key;
use crate::store::DEFAULT_SLOT_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

pub const CONFIG_KEYS: &[&str] = &[
    "storage-key",
    "identifier-label",
    "email-subject",
    "confirm-delete",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case", default)]
pub struct PinbookConfig {
    pub storage_key: String,
    pub identifier_label: String,
    pub email_subject: String,
    pub confirm_delete: bool,
}

impl Default for PinbookConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_SLOT_KEY.to_string(),
            identifier_label: DEFAULT_LABEL.to_string(),
            email_subject: "My PIN".to_string(),
            confirm_delete: true,
        }
    }
}

impl PinbookConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_json::from_str(&content).map_err(|e| {
            PinbookError::Config(format!("Cannot read {}: {}", path.display(), e))
        })
    }

    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "storage-key" => Some(self.storage_key.clone()),
            "identifier-label" => Some(self.identifier_label.clone()),
            "email-subject" => Some(self.email_subject.clone()),
            "confirm-delete" => Some(self.confirm_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "storage-key" => {
                validate_slot_key(value).map_err(|e| PinbookError::Config(e.to_string()))?;
                self.storage_key = value.to_string();
            }
            "identifier-label" => self.identifier_label = non_empty(key, value)?,
            "email-subject" => self.email_subject = non_empty(key, value)?,
            "confirm-delete" => self.confirm_delete = parse_bool(value)?,
            _ => {
                return Err(PinbookError::Config(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        CONFIG_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PinbookError::Config(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(PinbookError::Config(format!(
            "Expected true or false, got '{}'",
            value
        ))),
    }
}
