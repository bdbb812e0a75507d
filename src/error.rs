use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the weather-data provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("weather API returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("failed to parse weather API response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failures surfaced to the caller of a tool.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("missing required argument '{0}'")]
    MissingArgument(&'static str),

    #[error("invalid argument '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Failed to get weather for {city}: {source}")]
    Provider {
        city: String,
        #[source]
        source: ProviderError,
    },
}

impl ToolError {
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// True for argument problems caught before any provider call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument(_) | Self::InvalidArgument { .. }
        )
    }
}
