//! Service configuration: defaults, optional JSON file, env overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const CONFIG_ENV: &str = "LABELCASE_CONFIG";
pub const HOST_ENV: &str = "LABELCASE_HOST";
pub const PORT_ENV: &str = "LABELCASE_PORT";
pub const LEXICON_ENV: &str = "LABELCASE_LEXICON";
pub const CORS_ENV: &str = "LABELCASE_CORS_ORIGINS";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub lexicon: LexiconConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Word list backing the dictionary check. `None` uses the bundled list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 5000 }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".into(),
                "http://127.0.0.1:3000".into(),
                "http://localhost:8000".into(),
                "http://127.0.0.1:8000".into(),
                "file://".into(),
            ],
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

impl ServiceConfig {
    /// Defaults, then the JSON file named by `LABELCASE_CONFIG`, then
    /// individual env overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(|key| std::env::var(key).ok())
    }

    /// [`ServiceConfig::load`] over an arbitrary variable source.
    pub fn load_from(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match var(CONFIG_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(host) = var(HOST_ENV) {
            config.server.host = host;
        }
        if let Some(port) = var(PORT_ENV) {
            config.server.port = port
                .parse()
                .with_context(|| format!("{PORT_ENV}={port} is not a port"))?;
        }
        if let Some(path) = var(LEXICON_ENV) {
            config.lexicon.path = Some(PathBuf::from(path));
        }
        if let Some(origins) = var(CORS_ENV) {
            config.cors.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {path}"))
    }
}
