// src/config.rs

//! Widget configuration, loaded from `config.yml`
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::Result;

/// Environment variable that overrides `base_url`
pub const BASE_URL_ENV: &str = "CHAT_BASE_URL";

const DEFAULT_CONFIG_FILE: &str = "config.yml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub base_url: String,
    pub health_path: String,
    pub chat_path: String,
    /// Unset means requests may run indefinitely.
    pub request_timeout_secs: Option<u64>,
    pub log_dir: PathBuf,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "Medical AI Chatbot".to_string(),
            base_url: "http://localhost:5000".to_string(),
            health_path: "/api/health".to_string(),
            chat_path: "/api/chat".to_string(),
            request_timeout_secs: None,
            log_dir: PathBuf::from("./logs"),
        }
    }
}

impl WidgetConfig {
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: WidgetConfig = serde_yaml::from_str(&content)?;
        config.validated()
    }

    /// Resolve the config the way the binary does: an explicit path, else
    /// `./config.yml` when it exists, else defaults. `CHAT_BASE_URL` wins last.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load_from_path(&path)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_from_path(fallback)?
                } else {
                    Self::default()
                }
            }
        };

        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }

        config.validated()
    }

    fn validated(self) -> Result<Self> {
        if self.base_url.trim().is_empty() {
            return Err("base_url must not be empty".into());
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err("base_url must start with http:// or https://".into());
        }
        Ok(self)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn health_url(&self) -> String {
        self.endpoint(&self.health_path)
    }

    pub fn chat_url(&self) -> String {
        self.endpoint(&self.chat_path)
    }

    /// Join the base URL and a path with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
