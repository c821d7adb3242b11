use serde::{Deserialize, Serialize};

/// Body of `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Successful reply from `POST /api/chat`. Fields beyond these are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub ai_response: String,
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
}

/// Parsed body of `GET /api/health`.
///
/// The shape is not fixed; any JSON document counts as a reply. The two
/// fields the backend normally reports are lifted out for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct HealthReport {
    pub http_status: u16,
    pub status: Option<String>,
    pub diseases_loaded: Option<u64>,
    pub raw: serde_json::Value,
}

impl HealthReport {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.http_status)
    }

    /// One-line description for the startup log
    pub fn summary(&self) -> String {
        let status = self.status.as_deref().unwrap_or("unknown");
        match self.diseases_loaded {
            Some(count) => format!("{} ({} diseases loaded)", status, count),
            None => status.to_string(),
        }
    }

    pub fn from_body(http_status: u16, raw: serde_json::Value) -> Self {
        let status = raw.get("status")
            .and_then(|v| v.as_str())
            .map(|s| s.to_string());
        let diseases_loaded = raw.get("diseases_loaded").and_then(|v| v.as_u64());

        Self { http_status, status, diseases_loaded, raw }
    }
}
