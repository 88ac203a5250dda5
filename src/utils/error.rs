use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Failed to load {location}: HTTP {status}")]
    SourceStatusError { location: String, status: u16 },

    #[error("Failed to read {location}: {source}")]
    SourceReadError {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid {document} document at {location}: {message}")]
    InvalidDocumentError {
        document: String,
        location: String,
        message: String,
    },

    #[error("Render error ({renderer}): {message}")]
    RenderError { renderer: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl LeagueError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LeagueError::HttpError(_) | LeagueError::SourceStatusError { .. } => {
                ErrorCategory::Network
            }
            LeagueError::SerializationError(_)
            | LeagueError::SourceReadError { .. }
            | LeagueError::InvalidDocumentError { .. } => ErrorCategory::Input,
            LeagueError::ConfigError { .. }
            | LeagueError::ConfigValidationError { .. }
            | LeagueError::InvalidConfigValueError { .. }
            | LeagueError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LeagueError::ZipError(_)
            | LeagueError::CsvError(_)
            | LeagueError::IoError(_)
            | LeagueError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LeagueError::HttpError(_) => "Check the network connection and the source URL",
            LeagueError::SourceStatusError { .. } => {
                "Make sure the teams/games documents are published at the given location"
            }
            LeagueError::SourceReadError { .. } => "Check that the teams and games files exist",
            LeagueError::SerializationError(_) | LeagueError::InvalidDocumentError { .. } => {
                "Make sure teams and games are valid JSON arrays"
            }
            LeagueError::ConfigError { .. }
            | LeagueError::ConfigValidationError { .. }
            | LeagueError::InvalidConfigValueError { .. }
            | LeagueError::MissingConfigError { .. } => {
                "Review the command line arguments or the TOML configuration file"
            }
            LeagueError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            LeagueError::ZipError(_) | LeagueError::CsvError(_) | LeagueError::RenderError { .. } => {
                "Retry without --bundle or with fewer output formats"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch league data: {}", self),
            ErrorCategory::Input => format!("League data could not be read: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Output => format!("Could not write the league report: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LeagueError>;
