use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeafError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration parse error in '{field}': {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LeafError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // A closed stdout (e.g. `| head -1`) is not worth a failing exit.
            LeafError::IoError(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                ErrorSeverity::Low
            }
            LeafError::IoError(_) => ErrorSeverity::Critical,
            LeafError::SerializationError(_) => ErrorSeverity::High,
            LeafError::ConfigParseError { .. } | LeafError::InvalidConfigValueError { .. } => {
                ErrorSeverity::Medium
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Whether the process should exit non-zero for this error.
    pub fn is_failure(&self) -> bool {
        self.exit_code() > 0
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LeafError::IoError(e) => format!("Could not read or write a file: {}", e),
            LeafError::SerializationError(_) => "Could not render the report".to_string(),
            LeafError::ConfigParseError { field, .. } => {
                format!("The inputs file could not be parsed ({})", field)
            }
            LeafError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LeafError::IoError(_) => "Check that the path exists and is readable",
            LeafError::SerializationError(_) => "Retry with --format text",
            LeafError::ConfigParseError { .. } => {
                "Check the TOML syntax and that values under [inputs] have the right types"
            }
            LeafError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, LeafError>;
