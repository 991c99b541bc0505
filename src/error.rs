use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Goal timeline parsing errors
    #[error("Invalid match minute '{token}': {reason}")]
    MinuteParse { token: String, reason: String },

    #[error("Invalid goal list '{raw}': {reason}")]
    ListParse { raw: String, reason: String },

    // Match record errors
    #[error("Invalid value for {field}: '{value}'")]
    StatParse { field: String, value: String },

    #[error("Malformed match record on line {line}: {message}")]
    RecordParse { line: usize, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Date/time parsing error: {0}")]
    DateTimeParse(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a minute parsing error for a raw goal-time token
    pub fn minute_parse(token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MinuteParse {
            token: token.into(),
            reason: reason.into(),
        }
    }

    /// Create a list parsing error for a serialized goal list
    pub fn list_parse(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ListParse {
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Create a statistic parsing error for a record field
    pub fn stat_parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::StatParse {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a record parsing error with the 1-based input line
    pub fn record_parse(line: usize, message: impl Into<String>) -> Self {
        Self::RecordParse {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a date/time parsing error with context
    pub fn datetime_parse_error(msg: impl Into<String>) -> Self {
        Self::DateTimeParse(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if error comes from malformed goal timeline input
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            AppError::MinuteParse { .. } | AppError::ListParse { .. }
        )
    }
}
