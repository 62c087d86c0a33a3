use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneDataError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Failed to parse {context}: {message}")]
    ParseError { context: String, message: String },

    #[error("Upstream returned HTTP {status}: {body}")]
    UpstreamError { status: u16, body: String },

    #[error("Upstream GraphQL error: {}", .messages.join("; "))]
    UpstreamGraphQlError { messages: Vec<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Parse,
    Upstream,
    Config,
}

impl GeneDataError {
    pub fn parse(context: impl Into<String>, message: impl ToString) -> Self {
        Self::ParseError {
            context: context.into(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NetworkError(_) => ErrorCategory::Network,
            Self::ParseError { .. } => ErrorCategory::Parse,
            Self::UpstreamError { .. } | Self::UpstreamGraphQlError { .. } => {
                ErrorCategory::Upstream
            }
            Self::IoError(_) | Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    /// Short message for the terminal, without transport internals.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::NetworkError(e) if e.is_connect() => {
                "Could not reach the data service. Check the base URL and your connection.".to_string()
            }
            Self::NetworkError(e) if e.is_timeout() => "The data service timed out.".to_string(),
            Self::NetworkError(_) => "The request to the data service failed.".to_string(),
            Self::ParseError { context, .. } => {
                format!("The data service sent an unexpected {} response.", context)
            }
            Self::UpstreamError { status, .. } => {
                format!("The data service answered with HTTP {}.", status)
            }
            Self::UpstreamGraphQlError { messages } => {
                format!("Pharos reported an error: {}", messages.join("; "))
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GeneDataError>;
