use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for console operations
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// Error types for the console library
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid filter '{value}' for {source_name}. Allowed values: {allowed}")]
    InvalidFilter {
        source_name: String,
        value: String,
        allowed: String,
    },

    #[error("{message}")]
    MissingInput { message: String },

    #[error("Unsupported file: {path} (expected .json or .csv)")]
    UnsupportedFile { path: PathBuf },

    #[error("Invalid upload file: {message}")]
    InvalidUpload { message: String },

    #[error("Voice error: {message}")]
    Voice { message: String },
}

impl ConsoleError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new API error from a status code and response text
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a new missing input error
    pub fn missing_input<S: Into<String>>(message: S) -> Self {
        Self::MissingInput {
            message: message.into(),
        }
    }

    /// Create a new invalid upload error
    pub fn invalid_upload<S: Into<String>>(message: S) -> Self {
        Self::InvalidUpload {
            message: message.into(),
        }
    }

    /// Create a new voice error
    pub fn voice<S: Into<String>>(message: S) -> Self {
        Self::Voice {
            message: message.into(),
        }
    }

    /// Short message suitable for a notification.
    ///
    /// API errors surface the server's own text, the way the browser console
    /// showed the failed response body.
    pub fn notice(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::MissingInput { message } => message.clone(),
            other => other.to_string(),
        }
    }
}
