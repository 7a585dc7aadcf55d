//! Site configuration

use crate::domain::availability::{ContactWindow, LabelSet};
use crate::errors::ValidationError;
use chrono_tz::Tz;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown time zone {0:?}")]
    TimeZone(String),
    #[error("contact {name:?} has invalid hours: {source}")]
    Contact {
        name: String,
        source: ValidationError,
    },
}

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: String,
    pub schema_path: String,
    pub max_workers: usize,
    /// IANA name; availability is computed in this zone.
    pub business_time_zone: String,
    /// Shared key for the admin pages. Admin is disabled when unset.
    pub admin_key: Option<String>,
    /// Number used by the floating chat widget.
    pub chat_phone: String,
    pub chat_greeting: String,
    pub contacts: Vec<ContactConfig>,
    pub rooms: Vec<RoomConfig>,
    pub labels: LabelsConfig,
    pub copywriter: CopyWriterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContactConfig {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub start_hour: i64,
    pub end_hour: i64,
}

impl ContactConfig {
    pub fn window(&self) -> Result<ContactWindow, ValidationError> {
        ContactWindow::new(self.start_hour, self.end_hour)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    pub neighbourhood: String,
    pub size_m2: u32,
    pub available: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub contact: LabelSet,
    pub widget: LabelSet,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            contact: LabelSet::contact_page(),
            widget: LabelSet::floating_widget(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CopyWriterConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for CopyWriterConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            database_path: "site.sqlite3".to_string(),
            schema_path: "sql/schema.sql".to_string(),
            max_workers: 8,
            business_time_zone: "Europe/Madrid".to_string(),
            admin_key: None,
            chat_phone: "34600000000".to_string(),
            chat_greeting: "Hello! I'd like to know more about your rental management.".to_string(),
            contacts: vec![
                ContactConfig {
                    name: "Office".to_string(),
                    role: "Owners & investors".to_string(),
                    phone: "34600000000".to_string(),
                    start_hour: 9,
                    end_hour: 14,
                },
                ContactConfig {
                    name: "Tenant support".to_string(),
                    role: "Rooms & incidents".to_string(),
                    phone: "34600000001".to_string(),
                    start_hour: 10,
                    end_hour: 19,
                },
            ],
            rooms: vec![
                RoomConfig {
                    name: "Room A".to_string(),
                    neighbourhood: "Ruzafa".to_string(),
                    size_m2: 12,
                    available: true,
                },
                RoomConfig {
                    name: "Room B".to_string(),
                    neighbourhood: "Benimaclet".to_string(),
                    size_m2: 10,
                    available: false,
                },
            ],
            labels: LabelsConfig::default(),
            copywriter: CopyWriterConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads `SITE_CONFIG` (if set), then applies env overrides, then validates.
    pub fn load() -> Result<Self, ConfigError> {
        let mut cfg = match std::env::var("SITE_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) => Self::default(),
        };
        cfg.apply_env();
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    fn apply_env(&mut self) {
        if let Ok(addr) = std::env::var("SITE_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(path) = std::env::var("SITE_DB") {
            self.database_path = path;
        }
        if let Ok(key) = std::env::var("SITE_ADMIN_KEY") {
            self.admin_key = Some(key);
        }
        if let Ok(key) = std::env::var("COPY_API_KEY") {
            self.copywriter.api_key = Some(key);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.time_zone()?;
        for contact in &self.contacts {
            contact.window().map_err(|source| ConfigError::Contact {
                name: contact.name.clone(),
                source,
            })?;
        }
        Ok(())
    }

    pub fn time_zone(&self) -> Result<Tz, ConfigError> {
        self.business_time_zone
            .parse::<Tz>()
            .map_err(|_| ConfigError::TimeZone(self.business_time_zone.clone()))
    }
}
