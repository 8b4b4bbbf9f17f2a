use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ReportError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::IoError(e) => format!("File access failed: {}", e),
            ReportError::SerializationError(e) => format!("Could not serialize the report: {}", e),
            ReportError::ConfigError { message } => format!("Configuration problem: {}", message),
            ReportError::MissingConfigError { field } => {
                format!("Required configuration field '{}' is missing", field)
            }
            ReportError::InvalidConfigValueError { field, value, reason } => {
                format!("Configuration field '{}' has invalid value '{}': {}", field, value, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::IoError(_) => "Check that the path exists and is readable",
            ReportError::SerializationError(_) => "Re-run with --verbose to see the offending data",
            ReportError::ConfigError { .. }
            | ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. } => {
                "Run with --help to see the expected arguments"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
