//! Configuration loading for the ticketing service
//!
//! Supports JSON configuration files for:
//! - Server settings (host, port)
//! - Seed partners and customers registered at startup
//! - Seed events, attached to a seed partner by cnpj

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for the ticketing service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, shown in logs
    #[serde(default = "default_service_name")]
    pub name: String,

    #[serde(default)]
    pub server: ServerConfig,

    /// Partners to register at startup
    #[serde(default)]
    pub partners: Vec<PartnerSeed>,

    /// Customers to register at startup
    #[serde(default)]
    pub customers: Vec<CustomerSeed>,

    /// Events to create at startup
    #[serde(default)]
    pub events: Vec<EventSeed>,
}

fn default_service_name() -> String {
    "Ticketing Service".to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_service_name(),
            server: ServerConfig::default(),
            partners: Vec::new(),
            customers: Vec::new(),
            events: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Default configuration with `HOST` / `PORT` environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Some(port) = std::env::var("PORT").ok().and_then(|p| p.parse().ok()) {
            config.server.port = port;
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerSeed {
    pub cnpj: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSeed {
    pub cpf: String,
    pub email: String,
    pub name: String,
}

/// Event seed; the owning partner is named by cnpj since ids are minted
/// at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSeed {
    pub date: NaiveDate,
    pub name: String,
    pub partner_cnpj: String,
    pub total_spots: u32,
}

/// Configuration errors
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),
}
