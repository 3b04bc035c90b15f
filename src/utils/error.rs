use thiserror::Error;

#[derive(Error, Debug)]
pub enum PythiaError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("server returned {status} for {url}")]
    StatusError { status: u16, url: String },

    #[error("login failed: {message}")]
    LoginError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Date parsing error: {0}")]
    DateError(#[from] chrono::ParseError),
}

impl PythiaError {
    /// Any 4xx other than 404 on an authenticated request means the session
    /// is no longer valid and the local user must be dropped.
    pub fn is_session_expired(&self) -> bool {
        match self {
            PythiaError::StatusError { status, .. } => {
                *status >= 400 && *status != 404 && *status < 500
            }
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, PythiaError>;
