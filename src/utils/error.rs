use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Dataset download failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Record load failed: {message}")]
    LoadError { message: String },

    #[error("Unknown site category: {label}")]
    UnknownCategory { label: String },

    #[error("Top-N out of range: requested {requested}, have {available} counties")]
    TopNOutOfRange { requested: usize, available: usize },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Usage,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::ApiError(_) => ErrorCategory::Network,
            SiteError::CsvError(_) | SiteError::LoadError { .. } => ErrorCategory::Data,
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorCategory::System,
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SiteError::UnknownCategory { .. } | SiteError::TopNOutOfRange { .. } => {
                ErrorCategory::Usage
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Retryable: the dataset endpoint may simply be down
            SiteError::ApiError(_) => ErrorSeverity::Medium,
            // Fatal data-integrity failures: no partial store is usable
            SiteError::CsvError(_) | SiteError::LoadError { .. } => ErrorSeverity::Critical,
            SiteError::IoError(_) | SiteError::SerializationError(_) => ErrorSeverity::High,
            SiteError::ConfigError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorSeverity::High,
            SiteError::UnknownCategory { .. } | SiteError::TopNOutOfRange { .. } => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SiteError::ApiError(_) => "Could not download the dataset.".to_string(),
            SiteError::CsvError(_) => "The dataset file could not be parsed.".to_string(),
            SiteError::LoadError { message } => format!("The dataset is invalid: {}", message),
            SiteError::UnknownCategory { label } => {
                format!("'{}' is not a known site category.", label)
            }
            SiteError::TopNOutOfRange {
                requested,
                available,
            } => format!(
                "Cannot show the top {} counties; choose between 1 and {}.",
                requested, available
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the dataset URL and your connection, then retry.",
            ErrorCategory::Data => {
                "Verify the CSV has the National Register columns and parsable dates."
            }
            ErrorCategory::Configuration => "Fix the settings file or CLI flags and rerun.",
            ErrorCategory::Usage => "Adjust the query arguments and rerun.",
            ErrorCategory::System => "Check file permissions and available disk space.",
        }
    }
}
