// src/api/mod.rs
//! HTTP client for the chat backend: one health probe, one chat exchange

pub mod models;

use async_trait::async_trait;
use std::fmt::Debug;
use tracing::debug;

use crate::config::WidgetConfig;
use crate::error::TransportError;

pub use models::{ChatReply, ChatRequest, HealthReport};

/// The two calls the widget makes to its backend.
#[async_trait]
pub trait ChatBackend: Send + Sync + Debug {
    async fn health(&self) -> Result<HealthReport, TransportError>;
    async fn chat(&self, message: &str) -> Result<ChatReply, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    health_url: String,
    chat_url: String,
}

impl HttpBackend {
    pub fn new(config: &WidgetConfig) -> Result<Self, TransportError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            health_url: config.health_url(),
            chat_url: config.chat_url(),
        })
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }

    pub fn health_url(&self) -> &str {
        &self.health_url
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn health(&self) -> Result<HealthReport, TransportError> {
        let response = self.client
            .get(&self.health_url)
            .send()
            .await?;

        // Only parseability decides; the status is reported alongside.
        let status = response.status().as_u16();
        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| TransportError::MalformedBody(e.to_string()))?;

        Ok(HealthReport::from_body(status, value))
    }

    async fn chat(&self, message: &str) -> Result<ChatReply, TransportError> {
        debug!("POST {} ({} chars)", self.chat_url, message.chars().count());

        let response = self.client
            .post(&self.chat_url)
            .json(&ChatRequest::new(message))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str::<ChatReply>(&body)
            .map_err(|e| TransportError::MalformedBody(e.to_string()))
    }
}
