use thiserror::Error;

/// Failure of a single HTTP call to the chat backend.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Health check failed: {0}")]
    HealthCheckFailure(#[source] TransportError),

    #[error("Chat exchange failed: {0}")]
    ChatExchangeFailure(#[source] TransportError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl From<&str> for WidgetError {
    fn from(error: &str) -> Self {
        WidgetError::Config(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
