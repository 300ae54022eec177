use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("{provider}: request failed: {source}")]
    Transport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider}: unexpected HTTP status {status}")]
    Status { provider: String, status: u16 },

    #[error("{provider}: could not decode response: {source}")]
    Decode {
        provider: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{provider}: unsupported response: {message}")]
    UnsupportedShape { provider: String, message: String },

    #[error("{provider}: invalid request URL '{url}': {reason}")]
    InvalidUrl {
        provider: String,
        url: String,
        reason: String,
    },

    #[error("{provider}: lookup task failed: {message}")]
    TaskFailed { provider: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl LookupError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LookupError::Transport { provider, .. } => {
                format!("Could not reach {}", provider)
            }
            LookupError::Status { provider, status } => {
                format!("{} answered with HTTP {}", provider, status)
            }
            LookupError::Decode { provider, .. } | LookupError::UnsupportedShape { provider, .. } => {
                format!("{} returned data that could not be understood", provider)
            }
            LookupError::InvalidUrl { provider, .. } => {
                format!("The CEP could not be sent to {}", provider)
            }
            LookupError::TaskFailed { provider, .. } => {
                format!("The lookup against {} stopped unexpectedly", provider)
            }
            LookupError::ConfigError { message } => format!("Configuration problem: {}", message),
            LookupError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            LookupError::IoError(e) => format!("File access failed: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, LookupError>;
