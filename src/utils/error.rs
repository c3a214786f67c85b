use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Delayed invocation was cancelled")]
    Cancelled,

    #[error("Scheduled task failed: {message}")]
    TaskFailed { message: String },
}

impl UtilError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, UtilError::Cancelled)
    }

    /// Short message for terminal output.
    pub fn user_friendly_message(&self) -> String {
        match self {
            UtilError::IoError(e) => format!("Could not read input: {}", e),
            UtilError::SerializationError(e) => format!("Input is not valid JSON: {}", e),
            UtilError::TomlError(e) => format!("Config file is not valid TOML: {}", e),
            UtilError::ConfigError { message } => format!("Configuration problem: {}", message),
            UtilError::InvalidConfigValueError { field, reason, .. } => {
                format!("Config field '{}' is invalid: {}", field, reason)
            }
            UtilError::Cancelled => "The operation was cancelled".to_string(),
            UtilError::TaskFailed { message } => format!("A scheduled task failed: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilError>;
